/// Routing key under which a node publishes its telemetry
///
/// Identities are inserted verbatim. A `/` inside either one adds topic
/// levels; whether identities need escaping is still an open question.
pub fn format_topic(user: &str, device: &str) -> String {
    format!("sensors/{}/{}", user, device)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_format() {
        assert_eq!(
            format_topic("user@example.com", "meteoStation_1"),
            "sensors/user@example.com/meteoStation_1"
        );
    }

    #[test]
    fn separators_are_not_escaped() {
        assert_eq!(format_topic("a/b", "c"), "sensors/a/b/c");
    }
}
