use crate::error::{Error, WfhResult};

/// Pull the single weekday argument out of the process arguments.
///
/// `args` excludes the program name.
pub fn day_argument<I>(args: I) -> WfhResult<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(day), None) => Ok(day),
        _ => Err(Error::Usage),
    }
}
