// region:    --- Imports
use crate::auction::model::{AuctionItem, Bid, Category, ConnectsTransaction, User, WonItem};
use crate::bidding::commands::PlaceBidCommand;
use crate::client::ApiClient;
use crate::error::Result;
use crate::query::queries;
use async_trait::async_trait;

// endregion: --- Imports

// region:    --- Item Filter
/// 경매 상품 목록 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFilter {
    All,
    Hot,
    Featured,
    EndingSoon,
}

impl ItemFilter {
    /// `filter` 쿼리 값. 전체 목록은 파라미터 없이 요청한다.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            ItemFilter::All => None,
            ItemFilter::Hot => Some("hot"),
            ItemFilter::Featured => Some("featured"),
            ItemFilter::EndingSoon => Some("ending-soon"),
        }
    }
}

// endregion: --- Item Filter

// region:    --- Auction Service Trait
/// 원격 경매 서비스 트레이트
/// 입찰 검증, 잔액 차감, 요청 제한, 경매 종료 처리는 모두 원격 서비스 책임이다.
#[async_trait]
pub trait AuctionService: Send + Sync {
    async fn list_items(&self, filter: ItemFilter) -> Result<Vec<AuctionItem>>;
    async fn get_item(&self, item_id: &str) -> Result<AuctionItem>;
    async fn get_bid_history(&self, item_id: &str) -> Result<Vec<Bid>>;
    async fn get_categories(&self) -> Result<Vec<Category>>;
    async fn place_bid(&self, cmd: &PlaceBidCommand) -> Result<()>;
    async fn get_current_user(&self) -> Result<User>;
    async fn get_transactions(&self) -> Result<Vec<ConnectsTransaction>>;
    async fn get_won_items(&self) -> Result<Vec<WonItem>>;
}

/// HTTP 기반 원격 경매 서비스 구현체
#[derive(Debug, Clone)]
pub struct HttpAuctionService {
    client: ApiClient,
}

impl HttpAuctionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuctionService for HttpAuctionService {
    async fn list_items(&self, filter: ItemFilter) -> Result<Vec<AuctionItem>> {
        match filter.query_value() {
            Some(value) => {
                self.client
                    .get_with_query(queries::GET_ITEMS, &[(queries::ITEM_FILTER_PARAM, value)])
                    .await
            }
            None => self.client.get(queries::GET_ITEMS).await,
        }
    }

    async fn get_item(&self, item_id: &str) -> Result<AuctionItem> {
        self.client.get(&queries::get_item(item_id)).await
    }

    async fn get_bid_history(&self, item_id: &str) -> Result<Vec<Bid>> {
        self.client.get(&queries::get_bid_history(item_id)).await
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        self.client.get(queries::GET_CATEGORIES).await
    }

    async fn place_bid(&self, cmd: &PlaceBidCommand) -> Result<()> {
        self.client.post(queries::PLACE_BID, cmd).await
    }

    async fn get_current_user(&self) -> Result<User> {
        self.client.get(queries::GET_CURRENT_USER).await
    }

    async fn get_transactions(&self) -> Result<Vec<ConnectsTransaction>> {
        self.client.get(queries::GET_TRANSACTIONS).await
    }

    async fn get_won_items(&self) -> Result<Vec<WonItem>> {
        self.client.get(queries::GET_WON_ITEMS).await
    }
}

// endregion: --- Auction Service Trait

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_maps_to_query_value() {
        assert_eq!(ItemFilter::All.query_value(), None);
        assert_eq!(ItemFilter::Hot.query_value(), Some("hot"));
        assert_eq!(ItemFilter::Featured.query_value(), Some("featured"));
        assert_eq!(ItemFilter::EndingSoon.query_value(), Some("ending-soon"));
    }
}
