use crate::entity::PeerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresenceError {
    #[error("unknown peer: {0}")]
    UnknownPeer(PeerId),

    #[error("peer already registered: {0}")]
    DuplicatePeer(PeerId),
}

pub type Result<T> = std::result::Result<T, PresenceError>;
