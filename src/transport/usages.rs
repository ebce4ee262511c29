use serde::Deserialize;

use crate::domain::{Page, Usage, UsageFilter};

use super::common::{
    Params, TransportCount, TransportError, count, decode_page, encode_paging, push_opt, sid,
};
use super::money::{TransportMoney, money};

#[derive(Debug, Deserialize)]
struct UsageJson {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    product: Option<String>,
    #[serde(default)]
    product_id: Option<TransportCount>,
    #[serde(default)]
    day: Option<TransportCount>,
    #[serde(default)]
    month: Option<TransportCount>,
    #[serde(default)]
    year: Option<TransportCount>,
    #[serde(default)]
    quantity: Option<TransportCount>,
    #[serde(default)]
    average_cost: Option<TransportMoney>,
    #[serde(default)]
    total_cost: Option<TransportMoney>,
}

fn usage_from_json(parsed: UsageJson) -> Result<Usage, TransportError> {
    Ok(Usage {
        sid: sid("sid", parsed.sid)?,
        product: parsed.product,
        product_id: count(parsed.product_id),
        day: count(parsed.day),
        month: count(parsed.month),
        year: count(parsed.year),
        quantity: count(parsed.quantity),
        average_cost: money(parsed.average_cost),
        total_cost: money(parsed.total_cost),
    })
}

pub fn encode_usage_filter_query(filter: &UsageFilter) -> Vec<(String, String)> {
    let mut params = Params::new();
    push_opt(&mut params, "Day", filter.day.map(|day| day.to_string()));
    push_opt(&mut params, "Month", filter.month.map(|month| month.to_string()));
    push_opt(&mut params, "Year", filter.year.map(|year| year.to_string()));
    push_opt(
        &mut params,
        "Product",
        filter.product.map(|product| product.to_string()),
    );
    encode_paging(&mut params, &filter.paging);
    params
}

pub fn decode_usage(body: &str) -> Result<Usage, TransportError> {
    usage_from_json(serde_json::from_str(body)?)
}

pub fn decode_usage_page(body: &str) -> Result<Page<Usage>, TransportError> {
    decode_page(body, usage_from_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_usage() {
        let json = r#"
        {
          "sid": "UR2",
          "product": "Outbound Call",
          "product_id": "1",
          "day": 3, "month": 8, "year": 2018,
          "quantity": 14,
          "average_cost": 0.0200,
          "total_cost": "0.28"
        }
        "#;
        let usage = decode_usage(json).unwrap();
        assert_eq!(usage.product_id, Some(1));
        assert_eq!(usage.year, Some(2018));
        assert_eq!(usage.average_cost.as_deref(), Some("0.0200"));
        assert_eq!(usage.total_cost.as_deref(), Some("0.28"));
    }

    #[test]
    fn filter_encodes_period_and_product() {
        let filter = UsageFilter {
            month: Some(8),
            year: Some(2018),
            product: Some(1),
            ..Default::default()
        };
        assert_eq!(
            encode_usage_filter_query(&filter),
            vec![
                ("Month".to_owned(), "8".to_owned()),
                ("Year".to_owned(), "2018".to_owned()),
                ("Product".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn decodes_usage_page() {
        let json = r#"{"usages": [{"sid": "UR1"}], "num_pages": 4, "page": 3}"#;
        let page = decode_usage_page(json).unwrap();
        assert_eq!(page.page, 3);
        assert!(!page.has_next());
    }
}
