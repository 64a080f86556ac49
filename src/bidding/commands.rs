//! 입찰 관련 커맨드 처리
//! 원격 서비스에 입찰을 요청하고, 실패 시 오류 코드를 사용자 메시지로 변환한다.
//! 재시도, 멱등성 키, 클라이언트 측 충돌 해결은 하지 않는다.
// region:    --- Imports
use super::errors::{bid_error_message, MSG_GENERIC_FAILURE, MSG_NOT_SIGNED_IN};
use crate::auction::model::User;
use crate::error::ApiError;
use crate::service::AuctionService;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
// endregion: --- Imports

// region:    --- Commands
/// 입찰 명령
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidCommand {
    pub auction_item_id: String,
    pub amount: i64,
    pub user_id: String,
}

/// 입찰 요청 처리기 (마지막 오류 메시지를 보관)
pub struct BidPlacer<S> {
    service: S,
    error: Option<String>,
}

impl<S: AuctionService> BidPlacer<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            error: None,
        }
    }

    /// 현재 로그인한 사용자로 입찰.
    /// 401/403 만 로그인하지 않은 것으로 보고, 그 밖의 사용자 조회 실패는 입찰 실패로 처리한다.
    pub async fn place_bid_as_current_user(&mut self, auction_item_id: &str, amount: i64) -> bool {
        match self.service.get_current_user().await {
            Ok(user) => self.place_bid(auction_item_id, amount, Some(&user)).await,
            Err(e) if e.is_unauthorized() => {
                self.place_bid(auction_item_id, amount, None).await
            }
            Err(e) => {
                // 사용자 조회 실패 메시지는 입찰 메시지가 아니다
                self.fail(auction_item_id, &e, MSG_GENERIC_FAILURE.to_string());
                false
            }
        }
    }

    /// 입찰. 성공 시 true, 실패 시 false 와 함께 error() 에 메시지를 남긴다.
    pub async fn place_bid(
        &mut self,
        auction_item_id: &str,
        amount: i64,
        user: Option<&User>,
    ) -> bool {
        // 로그인하지 않은 경우 네트워크 요청 없이 실패
        let Some(user) = user else {
            warn!(
                "{:<12} --> 로그인하지 않은 사용자의 입찰 시도 item: {}",
                "Command", auction_item_id
            );
            self.error = Some(MSG_NOT_SIGNED_IN.to_string());
            return false;
        };

        let cmd = PlaceBidCommand {
            auction_item_id: auction_item_id.to_string(),
            amount,
            user_id: user.id.clone(),
        };
        info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);

        self.error = None;
        match self.service.place_bid(&cmd).await {
            Ok(()) => {
                info!(
                    "{:<12} --> 입찰 성공 item: {}, user: {}, amount: {}",
                    "Command", cmd.auction_item_id, cmd.user_id, cmd.amount
                );
                true
            }
            Err(e) => {
                self.fail(&cmd.auction_item_id, &e, bid_error_message(&e));
                false
            }
        }
    }

    fn fail(&mut self, auction_item_id: &str, e: &ApiError, message: String) {
        warn!(
            "{:<12} --> 입찰 실패 item: {}, code: {:?}, error: {}",
            "Command",
            auction_item_id,
            e.code(),
            e
        );
        self.error = Some(message);
    }

    /// 마지막 입찰 오류 메시지
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

// endregion: --- Commands

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::model::{AuctionItem, Bid, Category, ConnectsTransaction, WonItem};
    use crate::bidding::errors::MSG_INSUFFICIENT_CONNECTS;
    use crate::error::Result;
    use crate::service::ItemFilter;
    use async_trait::async_trait;
    use chrono::Utc;
    use reqwest::StatusCode;
    use std::sync::{Arc, Mutex};

    /// 입찰 응답을 순서대로 돌려주는 테스트용 서비스
    #[derive(Clone, Default)]
    struct FakeService {
        calls: Arc<Mutex<Vec<PlaceBidCommand>>>,
        responses: Arc<Mutex<Vec<Result<()>>>>,
        user_responses: Arc<Mutex<Vec<Result<User>>>>,
    }

    impl FakeService {
        fn respond_with(responses: Vec<Result<()>>) -> Self {
            Self {
                calls: Arc::default(),
                responses: Arc::new(Mutex::new(responses)),
                user_responses: Arc::default(),
            }
        }

        /// 사용자 조회 응답 지정 (지정하지 않으면 bidder())
        fn with_user_response(self, response: Result<User>) -> Self {
            self.user_responses.lock().unwrap().push(response);
            self
        }

        fn calls(&self) -> Vec<PlaceBidCommand> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AuctionService for FakeService {
        async fn list_items(&self, _filter: ItemFilter) -> Result<Vec<AuctionItem>> {
            Ok(vec![])
        }
        async fn get_item(&self, item_id: &str) -> Result<AuctionItem> {
            Err(rejected("AUCTION_NOT_FOUND", item_id))
        }
        async fn get_bid_history(&self, _item_id: &str) -> Result<Vec<Bid>> {
            Ok(vec![])
        }
        async fn get_categories(&self) -> Result<Vec<Category>> {
            Ok(vec![])
        }
        async fn place_bid(&self, cmd: &PlaceBidCommand) -> Result<()> {
            self.calls.lock().unwrap().push(cmd.clone());
            self.responses.lock().unwrap().remove(0)
        }
        async fn get_current_user(&self) -> Result<User> {
            let mut responses = self.user_responses.lock().unwrap();
            if responses.is_empty() {
                Ok(bidder())
            } else {
                responses.remove(0)
            }
        }
        async fn get_transactions(&self) -> Result<Vec<ConnectsTransaction>> {
            Ok(vec![])
        }
        async fn get_won_items(&self) -> Result<Vec<WonItem>> {
            Ok(vec![])
        }
    }

    fn rejected(code: &str, message: &str) -> ApiError {
        ApiError::Service {
            status: StatusCode::BAD_REQUEST,
            code: Some(code.to_string()),
            message: message.to_string(),
        }
    }

    fn bidder() -> User {
        User {
            id: "user-7".to_string(),
            email: "bidder@example.com".to_string(),
            display_name: Some("Bidder".to_string()),
            connects_balance: 120,
            is_admin: false,
            trust_score: 0.9,
            is_verified: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn unauthenticated_bid_makes_no_call() {
        let service = FakeService::respond_with(vec![Ok(())]);
        let mut placer = BidPlacer::new(service.clone());

        assert!(!placer.place_bid("item-1", 50, None).await);
        assert_eq!(placer.error(), Some(MSG_NOT_SIGNED_IN));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn success_sends_command_and_clears_prior_error() {
        let service = FakeService::respond_with(vec![
            Err(rejected("INSUFFICIENT_CONNECTS", "balance too low")),
            Ok(()),
        ]);
        let mut placer = BidPlacer::new(service.clone());
        let user = bidder();

        assert!(!placer.place_bid("item-1", 500, Some(&user)).await);
        assert_eq!(placer.error(), Some(MSG_INSUFFICIENT_CONNECTS));

        assert!(placer.place_bid("item-1", 60, Some(&user)).await);
        assert_eq!(placer.error(), None);

        let calls = service.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1],
            PlaceBidCommand {
                auction_item_id: "item-1".to_string(),
                amount: 60,
                user_id: "user-7".to_string(),
            }
        );
    }

    fn rejected_with_status(status: StatusCode) -> ApiError {
        ApiError::Service {
            status,
            code: None,
            message: "no session".to_string(),
        }
    }

    #[tokio::test]
    async fn current_user_bid_uses_fetched_user() {
        let service = FakeService::respond_with(vec![Ok(())]);
        let mut placer = BidPlacer::new(service.clone());

        assert!(placer.place_bid_as_current_user("item-1", 70).await);
        assert_eq!(service.calls()[0].user_id, "user-7");
    }

    #[tokio::test]
    async fn rejected_session_is_not_signed_in() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let service = FakeService::respond_with(vec![Ok(())])
                .with_user_response(Err(rejected_with_status(status)));
            let mut placer = BidPlacer::new(service.clone());

            assert!(!placer.place_bid_as_current_user("item-1", 70).await);
            assert_eq!(placer.error(), Some(MSG_NOT_SIGNED_IN), "{status}");
            assert!(service.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn failed_user_lookup_is_generic_failure() {
        let decode = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let cases = vec![
            Err(rejected_with_status(StatusCode::INTERNAL_SERVER_ERROR)),
            Err(ApiError::Decode(decode)),
        ];
        for response in cases {
            let service = FakeService::respond_with(vec![Ok(())]).with_user_response(response);
            let mut placer = BidPlacer::new(service.clone());

            assert!(!placer.place_bid_as_current_user("item-1", 70).await);
            assert_eq!(placer.error(), Some(MSG_GENERIC_FAILURE));
            assert!(service.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn unknown_code_keeps_service_message() {
        let service =
            FakeService::respond_with(vec![Err(rejected("AUCTION_PAUSED", "Bidding is paused"))]);
        let mut placer = BidPlacer::new(service);

        assert!(!placer.place_bid("item-2", 10, Some(&bidder())).await);
        assert_eq!(placer.error(), Some("Bidding is paused"));
    }

    #[tokio::test]
    async fn failures_are_not_retried() {
        let service = FakeService::respond_with(vec![
            Err(rejected("BID_RATE_LIMIT", "slow down")),
            Ok(()),
        ]);
        let mut placer = BidPlacer::new(service.clone());

        assert!(!placer.place_bid("item-3", 10, Some(&bidder())).await);
        assert_eq!(service.calls().len(), 1);

        placer.clear_error();
        assert_eq!(placer.error(), None);
    }

    #[tokio::test]
    async fn decode_failure_is_generic() {
        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let service = FakeService::respond_with(vec![Err(ApiError::Decode(decode))]);
        let mut placer = BidPlacer::new(service);

        assert!(!placer.place_bid("item-4", 10, Some(&bidder())).await);
        assert_eq!(placer.error(), Some(MSG_GENERIC_FAILURE));
    }

    #[test]
    fn command_serializes_camel_case() {
        let cmd = PlaceBidCommand {
            auction_item_id: "item-1".to_string(),
            amount: 75,
            user_id: "user-7".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            serde_json::json!({"auctionItemId": "item-1", "amount": 75, "userId": "user-7"})
        );
    }
}
