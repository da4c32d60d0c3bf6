use chrono::{DateTime, Local};

#[derive(Clone, Copy, Debug)]
pub(crate) struct Timestamp(DateTime<Local>);

impl Timestamp {
    pub(crate) fn now() -> Self {
        Self(Local::now())
    }

    pub(crate) fn iso(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }

    pub(crate) fn display(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formats() {
        let ts = Timestamp(Local.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap());

        assert_eq!(ts.iso(), "2024-03-01T14:05:09.000000");
        assert_eq!(ts.display(), "2024-03-01 14:05:09");
    }
}
