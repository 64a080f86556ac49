//! Connects 거래 내역 집계
//! 거래 내역(부호 있는 금액)을 합산해서 사용자 잔액과 비교한다. 아무것도 수정하지 않는다.
// region:    --- Imports
use super::model::{ConnectsTransaction, TransactionType, User};
use std::collections::HashMap;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Connects Ledger
#[derive(Debug, Clone, Default)]
pub struct ConnectsLedger {
    balance: i64,
    totals: HashMap<TransactionType, i64>,
    entries: usize,
    overflowed: bool,
}

/// 잔액 대조 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerReconciliation {
    pub ledger_balance: i64,
    pub stored_balance: i64,
    /// stored - ledger (i64 범위를 넘으면 포화)
    pub drift: i64,
    /// 합산 또는 drift 계산이 i64 범위를 넘었는지
    pub overflowed: bool,
}

impl LedgerReconciliation {
    /// 포화된 값으로는 일치를 판단하지 않는다
    pub fn is_consistent(&self) -> bool {
        !self.overflowed && self.drift == 0
    }
}

impl ConnectsLedger {
    /// 거래 내역으로 원장 생성
    pub fn from_transactions<'a>(
        transactions: impl IntoIterator<Item = &'a ConnectsTransaction>,
    ) -> Self {
        let mut ledger = Self::default();
        for tx in transactions {
            ledger.balance = ledger.add(ledger.balance, tx.amount);
            let total = ledger.totals.get(&tx.transaction_type).copied().unwrap_or(0);
            let total = ledger.add(total, tx.amount);
            ledger.totals.insert(tx.transaction_type, total);
            ledger.entries += 1;
        }
        if ledger.overflowed {
            warn!(
                "{:<12} --> 거래 합계가 i64 범위를 넘었습니다 entries: {}",
                "Ledger", ledger.entries
            );
        }
        ledger
    }

    /// 포화 덧셈, 넘치면 overflowed 표시
    fn add(&mut self, lhs: i64, rhs: i64) -> i64 {
        lhs.checked_add(rhs).unwrap_or_else(|| {
            self.overflowed = true;
            lhs.saturating_add(rhs)
        })
    }

    /// 합산 중 i64 범위를 넘었는지 (넘은 합계는 포화된 값)
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// 거래 내역 합계
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// 거래 유형별 합계
    pub fn total_for(&self, transaction_type: TransactionType) -> i64 {
        self.totals.get(&transaction_type).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// 사용자 잔액과 원장 대조
    pub fn reconcile(&self, user: &User) -> LedgerReconciliation {
        let drift = user.connects_balance.checked_sub(self.balance);
        let result = LedgerReconciliation {
            ledger_balance: self.balance,
            stored_balance: user.connects_balance,
            drift: drift.unwrap_or_else(|| user.connects_balance.saturating_sub(self.balance)),
            overflowed: self.overflowed || drift.is_none(),
        };
        if result.is_consistent() {
            info!(
                "{:<12} --> 잔액 일치 user: {}, balance: {}",
                "Ledger", user.id, result.stored_balance
            );
        } else {
            warn!(
                "{:<12} --> 잔액 불일치 user: {}, stored: {}, ledger: {}",
                "Ledger", user.id, result.stored_balance, result.ledger_balance
            );
        }
        result
    }
}

// endregion: --- Connects Ledger
