use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// 사용자 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub connects_balance: i64,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub trust_score: f64,
    #[serde(default)]
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

// 카테고리 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

// 경매 상품 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub current_bid: i64,
    pub minimum_bid: i64,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub is_hot: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AuctionItem {
    /// 경매 종료 여부
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now >= self.end_time
    }

    /// 남은 시간 (종료 후에는 0)
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Duration {
        if self.has_ended(now) {
            Duration::zero()
        } else {
            self.end_time - now
        }
    }

    /// 화면 표시용 다음 최소 입찰가. 실제 검증은 원격 서비스가 한다.
    pub fn minimum_next_bid(&self) -> i64 {
        self.current_bid.saturating_add(1).max(self.minimum_bid)
    }
}

// 입찰 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: String,
    pub auction_item_id: String,
    pub user_id: String,
    pub amount: i64,
    // 프록시 입찰 필드는 전달만 하고 해석하지 않는다
    #[serde(default)]
    pub is_proxy_bid: bool,
    #[serde(default)]
    pub max_proxy_amount: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// Connects 거래 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Earned,
    Spent,
    Purchased,
    Refunded,
}

// Connects 거래 모델 (amount 는 부호 있는 값)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectsTransaction {
    pub id: String,
    pub user_id: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

// 낙찰 상품 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WonItem {
    pub id: String,
    pub auction_item_id: String,
    pub user_id: String,
    pub winning_bid: i64,
    pub won_at: DateTime<Utc>,
}
