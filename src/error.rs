/// Turns a failed capability read into `None`, logging the failure as a warning.
///
/// Detection never fails loudly; a broken read only means there is nothing to match against.
pub trait ResultOkLogExt<T, E> {
    fn ok_or_warn(self, context: &str) -> Option<T>;
}

impl<T, E> ResultOkLogExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn ok_or_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(ok) => Some(ok),
            Err(err) => {
                log::warn!("{context}: {err}");
                None
            }
        }
    }
}
