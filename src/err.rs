use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum PipeErr {
    #[error("[Exhausted] No more elements in pipe")]
    NoSuchElement,

    #[error("[Unsupported] Operation `{0}` is not supported by pipes")]
    Unsupported(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_err_message() {
        assert_eq!("[Exhausted] No more elements in pipe", PipeErr::NoSuchElement.to_string());
        assert_eq!(
            "[Unsupported] Operation `remove` is not supported by pipes",
            PipeErr::Unsupported("remove").to_string()
        );
    }
}
