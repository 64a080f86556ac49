// region:    --- Imports
use crate::auction::model::{AuctionItem, Bid, Category, ConnectsTransaction, User, WonItem};
use crate::error::Result;
use crate::service::{AuctionService, ItemFilter};
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 모든 상품 조회
pub async fn get_all_items(service: &impl AuctionService) -> Result<Vec<AuctionItem>> {
    info!("{:<12} --> 모든 상품 조회", "Query");
    service.list_items(ItemFilter::All).await
}

/// 인기 상품 조회
pub async fn get_hot_items(service: &impl AuctionService) -> Result<Vec<AuctionItem>> {
    info!("{:<12} --> 인기 상품 조회", "Query");
    service.list_items(ItemFilter::Hot).await
}

/// 추천 상품 조회
pub async fn get_featured_items(service: &impl AuctionService) -> Result<Vec<AuctionItem>> {
    info!("{:<12} --> 추천 상품 조회", "Query");
    service.list_items(ItemFilter::Featured).await
}

/// 마감 임박 상품 조회
pub async fn get_ending_soon_items(service: &impl AuctionService) -> Result<Vec<AuctionItem>> {
    info!("{:<12} --> 마감 임박 상품 조회", "Query");
    service.list_items(ItemFilter::EndingSoon).await
}

/// 상품 조회
pub async fn get_item(service: &impl AuctionService, item_id: &str) -> Result<AuctionItem> {
    info!("{:<12} --> 상품 조회 id: {}", "Query", item_id);
    service.get_item(item_id).await
}

/// 입찰 이력 조회
pub async fn get_bid_history(service: &impl AuctionService, item_id: &str) -> Result<Vec<Bid>> {
    info!("{:<12} --> 입찰 이력 조회 id: {}", "Query", item_id);
    service.get_bid_history(item_id).await
}

/// 상품과 입찰 이력을 동시에 조회
pub async fn get_item_with_bids(
    service: &impl AuctionService,
    item_id: &str,
) -> Result<(AuctionItem, Vec<Bid>)> {
    info!("{:<12} --> 상품 및 입찰 이력 조회 id: {}", "Query", item_id);
    tokio::try_join!(service.get_item(item_id), service.get_bid_history(item_id))
}

/// 카테고리 조회
pub async fn get_categories(service: &impl AuctionService) -> Result<Vec<Category>> {
    info!("{:<12} --> 카테고리 조회", "Query");
    service.get_categories().await
}

/// 현재 사용자 조회
pub async fn get_current_user(service: &impl AuctionService) -> Result<User> {
    info!("{:<12} --> 현재 사용자 조회", "Query");
    service.get_current_user().await
}

/// Connects 거래 내역 조회
pub async fn get_transactions(service: &impl AuctionService) -> Result<Vec<ConnectsTransaction>> {
    info!("{:<12} --> Connects 거래 내역 조회", "Query");
    service.get_transactions().await
}

/// 낙찰 상품 조회
pub async fn get_won_items(service: &impl AuctionService) -> Result<Vec<WonItem>> {
    info!("{:<12} --> 낙찰 상품 조회", "Query");
    service.get_won_items().await
}

// endregion: --- Query Handlers
