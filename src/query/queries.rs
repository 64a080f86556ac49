/// 경매 상품 목록 조회 (구분은 `filter` 쿼리 파라미터로 전달)
pub const GET_ITEMS: &[&str] = &["auctions"];

/// 목록 구분 쿼리 파라미터 이름
pub const ITEM_FILTER_PARAM: &str = "filter";

/// 카테고리 조회
pub const GET_CATEGORIES: &[&str] = &["categories"];

/// 입찰
pub const PLACE_BID: &[&str] = &["bids"];

/// 현재 사용자 조회
pub const GET_CURRENT_USER: &[&str] = &["users", "me"];

/// Connects 거래 내역 조회
pub const GET_TRANSACTIONS: &[&str] = &["users", "me", "transactions"];

/// 낙찰 상품 조회
pub const GET_WON_ITEMS: &[&str] = &["users", "me", "won-items"];

/// 상품 조회. id 는 하나의 경로 세그먼트로 인코딩된다.
pub fn get_item(item_id: &str) -> [&str; 2] {
    ["auctions", item_id]
}

/// 상품 입찰 이력 조회
pub fn get_bid_history(item_id: &str) -> [&str; 3] {
    ["auctions", item_id, "bids"]
}
