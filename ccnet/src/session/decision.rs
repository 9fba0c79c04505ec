// ccnet-rs/ccnet/src/session/decision.rs

use crate::types::Denomination;

/// What to do with a note held in escrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscrowDecision {
    /// STACK the note into the cassette.
    Accept,
    /// RETURN the note to the customer.
    Reject,
}

/// Decides once per escrowed note whether to keep it.
///
/// `total` is the running total before this note.
pub trait EscrowDecider: Send {
    fn decide(&mut self, denomination: Denomination, total: u32) -> EscrowDecision;
}

impl<F> EscrowDecider for F
where
    F: FnMut(Denomination, u32) -> EscrowDecision + Send,
{
    fn decide(&mut self, denomination: Denomination, total: u32) -> EscrowDecision {
        self(denomination, total)
    }
}

/// Accepts every recognised note.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl EscrowDecider for AcceptAll {
    fn decide(&mut self, _denomination: Denomination, _total: u32) -> EscrowDecision {
        EscrowDecision::Accept
    }
}
