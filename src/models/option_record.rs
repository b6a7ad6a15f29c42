use {
    serde::{Deserialize, Deserializer, Serialize},
    strum_macros::Display,
};

/// Contract type tag on a strike row.
///
/// `Other` absorbs missing, null, and unrecognized tags so one bad row never
/// fails the whole envelope; the partitioner drops such rows silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum OptionType {
    #[strum(to_string = "CE")]
    CE,
    #[strum(to_string = "PE")]
    PE,
    #[default]
    #[strum(to_string = "?")]
    Other,
}

impl<'de> Deserialize<'de> for OptionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(match tag.as_deref() {
            Some("CE") => OptionType::CE,
            Some("PE") => OptionType::PE,
            _ => OptionType::Other,
        })
    }
}

/// One strike row as the analytics backend sends it.
///
/// Wire names are camelCase (NSE convention). The whole struct is
/// `#[serde(default)]` because upstream rows are frequently partial; the
/// validator decides per selected field whether a row is plottable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionRecord {
    #[serde(rename = "strikePrice")]
    pub strike_price: f64,
    #[serde(rename = "expiryDate")]
    pub expiry_date: String,
    pub underlying: String,
    pub identifier: String,
    #[serde(rename = "openInterest")]
    pub open_interest: i64,
    #[serde(rename = "changeinOpenInterest")]
    pub change_in_open_interest: i64,
    #[serde(rename = "pchangeinOpenInterest")]
    pub pchange_in_open_interest: f64,
    #[serde(rename = "totalTradedVolume")]
    pub total_traded_volume: i64,
    // Strikes with no traded premium come through as null
    #[serde(rename = "impliedVolatility")]
    pub implied_volatility: Option<f64>,
    #[serde(rename = "lastPrice")]
    pub last_price: f64,
    pub change: f64,
    #[serde(rename = "pChange")]
    pub p_change: f64,
    #[serde(rename = "totalBuyQuantity")]
    pub total_buy_quantity: i64,
    #[serde(rename = "totalSellQuantity")]
    pub total_sell_quantity: i64,
    #[serde(rename = "bidQty")]
    pub bid_qty: i64,
    // Upstream really does spell this one lowercase
    #[serde(rename = "bidprice")]
    pub bid_price: f64,
    #[serde(rename = "askQty")]
    pub ask_qty: i64,
    #[serde(rename = "askPrice")]
    pub ask_price: f64,
    #[serde(rename = "underlyingValue")]
    pub underlying_value: f64,
    #[serde(rename = "type")]
    pub option_type: OptionType,

    // Greeks and lot size are only present when the backend computed them
    pub delta: Option<f64>,
    pub theta: Option<f64>,
    pub gamma: Option<f64>,
    pub vega: Option<f64>,
    #[serde(rename = "lotSize")]
    pub lot_size: Option<i64>,

    // Analytics fields added by the backend per request
    #[serde(rename = "strikeGap")]
    pub strike_gap: Option<f64>,
    #[serde(rename = "strikeGapPercentage")]
    pub strike_gap_percentage: Option<f64>,
    #[serde(rename = "premiumPercentage")]
    pub premium_percentage: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_row_deserializes_with_defaults() {
        let record: OptionRecord = serde_json::from_value(json!({
            "strikePrice": 2500.0,
            "impliedVolatility": null,
            "type": "PE"
        }))
        .unwrap();

        assert_eq!(record.strike_price, 2500.0);
        assert_eq!(record.implied_volatility, None);
        assert_eq!(record.option_type, OptionType::PE);
        assert_eq!(record.total_traded_volume, 0);
        assert!(record.strike_gap.is_none());
    }

    #[test]
    fn unknown_type_tag_becomes_other() {
        let record: OptionRecord =
            serde_json::from_value(json!({ "type": "XX" })).unwrap();
        assert_eq!(record.option_type, OptionType::Other);

        let record: OptionRecord = serde_json::from_value(json!({ "type": null })).unwrap();
        assert_eq!(record.option_type, OptionType::Other);

        let record: OptionRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record.option_type, OptionType::Other);
    }

    #[test]
    fn full_row_round_trips_wire_names() {
        let record: OptionRecord = serde_json::from_value(json!({
            "strikePrice": 1400.0,
            "expiryDate": "30-Sep-2025",
            "underlying": "RELIANCE",
            "identifier": "OPTSTKRELIANCE30-Sep-2025CE1400.00",
            "openInterest": 1250,
            "changeinOpenInterest": -30,
            "pchangeinOpenInterest": -2.34,
            "totalTradedVolume": 125000,
            "impliedVolatility": 24.5,
            "lastPrice": 36.85,
            "change": 1.2,
            "pChange": 3.37,
            "totalBuyQuantity": 5000,
            "totalSellQuantity": 4200,
            "bidQty": 250,
            "bidprice": 36.8,
            "askQty": 500,
            "askPrice": 36.9,
            "underlyingValue": 1392.6,
            "type": "CE",
            "strikeGap": 7.4,
            "strikeGapPercentage": 0.53,
            "premiumPercentage": 2.63
        }))
        .unwrap();

        assert_eq!(record.option_type, OptionType::CE);
        assert_eq!(record.implied_volatility, Some(24.5));
        assert_eq!(record.bid_price, 36.8);
        assert_eq!(record.strike_gap_percentage, Some(0.53));
    }
}
