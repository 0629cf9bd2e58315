use bitflags::bitflags;

bitflags! {
    /// Reason given to the caller when `<Reject>` refuses a call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RejectReason: u8 {
        const REJECTED = 1 << 0;
        const BUSY = 1 << 1;
    }
}

impl RejectReason {
    const TOKENS: [(RejectReason, &'static str); 2] = [
        (RejectReason::REJECTED, "rejected"),
        (RejectReason::BUSY, "busy"),
    ];
}

exclusive_attr!(RejectReason, "reason");
