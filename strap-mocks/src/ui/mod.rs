//! Shared UI components for strap-mocks

mod link_card;
mod mock_header;

pub use link_card::LinkCard;
pub use mock_header::MockHeader;
