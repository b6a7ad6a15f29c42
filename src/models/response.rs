use {
    chrono::NaiveDateTime,
    serde::Deserialize,
    crate::models::OptionRecord,
};

/// Response envelope shared by all analytics endpoints.
///
/// A missing `data` array means "no results", not a protocol error. The
/// timestamp is naive (the backend serializes server-local time with no
/// offset) and is displayed as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyticsEnvelope {
    pub success: bool,
    pub message: String,
    pub data: Vec<OptionRecord>,
    pub timestamp: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_data_is_empty_result_set() {
        let envelope: AnalyticsEnvelope = serde_json::from_value(json!({
            "success": true,
            "message": "no strikes matched"
        }))
        .unwrap();

        assert!(envelope.success);
        assert!(envelope.data.is_empty());
        assert!(envelope.timestamp.is_none());
    }

    #[test]
    fn naive_timestamp_parses() {
        let envelope: AnalyticsEnvelope = serde_json::from_value(json!({
            "success": true,
            "message": "ok",
            "data": [],
            "timestamp": "2025-09-12T14:05:03.123456"
        }))
        .unwrap();

        let ts = envelope.timestamp.unwrap();
        assert_eq!(ts.format("%Y-%m-%d").to_string(), "2025-09-12");
    }

    #[test]
    fn data_rows_deserialize_inside_envelope() {
        let envelope: AnalyticsEnvelope = serde_json::from_value(json!({
            "success": true,
            "message": "Top volatile options retrieved successfully for RELIANCE",
            "data": [
                { "strikePrice": 1400.0, "type": "CE", "impliedVolatility": 24.5 },
                { "strikePrice": 1380.0, "type": "PE", "impliedVolatility": 22.1 }
            ]
        }))
        .unwrap();

        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].strike_price, 1400.0);
    }
}
