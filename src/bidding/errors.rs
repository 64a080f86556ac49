//! 입찰 오류 코드 및 사용자 메시지 변환
// region:    --- Imports
use crate::error::ApiError;

// endregion: --- Imports

// region:    --- Messages
pub const MSG_RATE_LIMIT: &str =
    "You're bidding too frequently. Please wait a moment and try again.";
pub const MSG_INVALID_BID_AMOUNT: &str = "Your bid must be higher than the current bid.";
pub const MSG_INSUFFICIENT_CONNECTS: &str = "You don't have enough Connects to place this bid.";
pub const MSG_AUCTION_NOT_FOUND: &str = "This auction could not be found or has already ended.";
pub const MSG_NOT_SIGNED_IN: &str = "You must be signed in to place a bid.";
pub const MSG_GENERIC_FAILURE: &str = "Failed to place bid. Please try again.";

// endregion: --- Messages

// region:    --- Bid Error Code
/// 원격 서비스가 반환하는 입찰 오류 코드
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BidErrorCode {
    RateLimit,
    InvalidBidAmount,
    InsufficientConnects,
    AuctionNotFound,
    Other(String),
}

impl BidErrorCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "BID_RATE_LIMIT" => BidErrorCode::RateLimit,
            "INVALID_BID_AMOUNT" => BidErrorCode::InvalidBidAmount,
            "INSUFFICIENT_CONNECTS" => BidErrorCode::InsufficientConnects,
            "AUCTION_NOT_FOUND" => BidErrorCode::AuctionNotFound,
            other => BidErrorCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BidErrorCode::RateLimit => "BID_RATE_LIMIT",
            BidErrorCode::InvalidBidAmount => "INVALID_BID_AMOUNT",
            BidErrorCode::InsufficientConnects => "INSUFFICIENT_CONNECTS",
            BidErrorCode::AuctionNotFound => "AUCTION_NOT_FOUND",
            BidErrorCode::Other(code) => code,
        }
    }

    /// 알려진 코드의 고정 메시지. 알 수 없는 코드는 None
    pub fn message(&self) -> Option<&'static str> {
        match self {
            BidErrorCode::RateLimit => Some(MSG_RATE_LIMIT),
            BidErrorCode::InvalidBidAmount => Some(MSG_INVALID_BID_AMOUNT),
            BidErrorCode::InsufficientConnects => Some(MSG_INSUFFICIENT_CONNECTS),
            BidErrorCode::AuctionNotFound => Some(MSG_AUCTION_NOT_FOUND),
            BidErrorCode::Other(_) => None,
        }
    }
}

// endregion: --- Bid Error Code

// region:    --- Error Mapping
/// 입찰 실패를 사용자 메시지로 변환
pub fn bid_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Service { code, message, .. } => {
            if let Some(mapped) = code.as_deref().map(BidErrorCode::parse).and_then(|c| c.message())
            {
                return mapped.to_string();
            }
            // 알 수 없는 코드는 서비스 메시지 그대로, 비어 있으면 일반 메시지
            let message = message.trim();
            if message.is_empty() {
                MSG_GENERIC_FAILURE.to_string()
            } else {
                message.to_string()
            }
        }
        ApiError::Http(_)
        | ApiError::Decode(_)
        | ApiError::Config(_)
        | ApiError::InvalidPath(_) => {
            MSG_GENERIC_FAILURE.to_string()
        }
    }
}

// endregion: --- Error Mapping
