/// Errors the driver can return. Compensation never fails, so the only
/// failure is the bus itself; it is passed through untouched.
#[derive(Debug, thiserror::Error)]
pub enum Error<E: std::error::Error + 'static> {
    #[error("bus transaction failed")]
    Bus(#[from] E),
}
