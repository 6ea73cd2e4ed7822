/// A result code reported by the keyring service for an unlock request.
///
/// The set of codes is open: a service may report values this program has
/// never heard of. Only [`ResultCode::OK`] means success.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ResultCode(u32);

impl ResultCode {
    pub const OK: ResultCode = ResultCode(0);
    pub const DENIED: ResultCode = ResultCode(1);
    pub const NO_KEYRING_DAEMON: ResultCode = ResultCode(2);
    pub const ALREADY_UNLOCKED: ResultCode = ResultCode(3);
    pub const NO_SUCH_KEYRING: ResultCode = ResultCode(4);
    pub const BAD_ARGUMENTS: ResultCode = ResultCode(5);
    pub const IO_ERROR: ResultCode = ResultCode(6);
    pub const CANCELLED: ResultCode = ResultCode(7);
    pub const KEYRING_ALREADY_EXISTS: ResultCode = ResultCode(8);
    pub const NO_MATCH: ResultCode = ResultCode(9);

    pub const fn new(raw: u32) -> Self {
        ResultCode(raw)
    }

    pub fn is_success(self) -> bool {
        self == ResultCode::OK
    }

    /// The symbolic name of a known code, for diagnostics only.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            ResultCode::OK => "OK",
            ResultCode::DENIED => "DENIED",
            ResultCode::NO_KEYRING_DAEMON => "NO_KEYRING_DAEMON",
            ResultCode::ALREADY_UNLOCKED => "ALREADY_UNLOCKED",
            ResultCode::NO_SUCH_KEYRING => "NO_SUCH_KEYRING",
            ResultCode::BAD_ARGUMENTS => "BAD_ARGUMENTS",
            ResultCode::IO_ERROR => "IO_ERROR",
            ResultCode::CANCELLED => "CANCELLED",
            ResultCode::KEYRING_ALREADY_EXISTS => "KEYRING_ALREADY_EXISTS",
            ResultCode::NO_MATCH => "NO_MATCH",
            _ => return None,
        };
        Some(name)
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
