//! Raw feed document types as deserialized from the feed's XML.
//!
//! Every vehicle attribute is kept as an optional string here; type coercion
//! and validation happen in the transformer so that one malformed record can
//! be dropped without failing the whole document.

use serde::Deserialize;

/// The feed's response document (`<body>` element).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedDocument {
    /// Vehicle position reports, one per `<vehicle>` element.
    #[serde(rename = "vehicle")]
    pub vehicles: Vec<RawVehicle>,

    /// The feed's own last-update time for this response.
    #[serde(rename = "lastTime")]
    pub last_time: Option<LastTime>,

    /// Present when the feed answers with an error body instead of data.
    #[serde(rename = "Error")]
    pub error: Option<FeedFault>,
}

/// One raw vehicle reading, attributes untyped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawVehicle {
    /// Vehicle identifier.
    #[serde(rename = "@id")]
    pub id: Option<String>,

    /// Route the vehicle is assigned to.
    #[serde(rename = "@routeTag")]
    pub route_tag: Option<String>,

    /// Direction within the route. Often absent for unassigned vehicles.
    #[serde(rename = "@dirTag")]
    pub dir_tag: Option<String>,

    /// Latitude in degrees.
    #[serde(rename = "@lat")]
    pub lat: Option<String>,

    /// Longitude in degrees.
    #[serde(rename = "@lon")]
    pub lon: Option<String>,

    /// Seconds since the vehicle last reported.
    #[serde(rename = "@secsSinceReport")]
    pub secs_since_report: Option<String>,

    /// Whether the feed considers the fix predictable.
    #[serde(rename = "@predictable")]
    pub predictable: Option<String>,

    /// Heading in degrees.
    #[serde(rename = "@heading")]
    pub heading: Option<String>,

    /// Ground speed in km/h.
    #[serde(rename = "@speedKmHr")]
    pub speed_km_hr: Option<String>,
}

/// The `<lastTime>` element carrying the feed's last-update time.
#[derive(Debug, Clone, Deserialize)]
pub struct LastTime {
    /// Last-update time in epoch millis.
    #[serde(rename = "@time", deserialize_with = "millis_from_str")]
    pub time: i64,
}

/// The feed's `<Error>` element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedFault {
    /// Whether the feed marked the condition as transient.
    #[serde(rename = "@shouldRetry")]
    pub should_retry: Option<String>,

    /// Error text.
    #[serde(rename = "$text")]
    pub message: Option<String>,
}

impl FeedFault {
    /// Whether the feed marked this error as retryable.
    pub fn should_retry(&self) -> bool {
        self.should_retry.as_deref() == Some("true")
    }
}

fn millis_from_str<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<body copyright="All data copyright agency.">
  <vehicle id="1266" routeTag="65" dirTag="65_0_65" lat="43.7" lon="-79.4"
           secsSinceReport="12" predictable="true" heading="270" speedKmHr="35"/>
  <vehicle id="1403" routeTag="65" lat="43.65" lon="-79.38"
           secsSinceReport="3" predictable="false" heading="90" speedKmHr="0"/>
  <lastTime time="1495374664331"/>
</body>"#;

    #[test]
    fn decodes_vehicles_and_last_time() {
        let doc: FeedDocument = quick_xml::de::from_str(SAMPLE).expect("should deserialize");
        assert_eq!(doc.vehicles.len(), 2);
        assert_eq!(doc.last_time.as_ref().map(|t| t.time), Some(1495374664331));
        assert!(doc.error.is_none());

        let first = &doc.vehicles[0];
        assert_eq!(first.id.as_deref(), Some("1266"));
        assert_eq!(first.dir_tag.as_deref(), Some("65_0_65"));
        assert_eq!(first.heading.as_deref(), Some("270"));
    }

    #[test]
    fn missing_attributes_deserialize_as_none() {
        let doc: FeedDocument = quick_xml::de::from_str(SAMPLE).expect("should deserialize");
        assert_eq!(doc.vehicles[1].dir_tag, None);
    }

    #[test]
    fn decodes_error_body() {
        let xml = r#"<body><Error shouldRetry="true">Agency server busy</Error></body>"#;
        let doc: FeedDocument = quick_xml::de::from_str(xml).expect("should deserialize");
        let fault = doc.error.expect("error element");
        assert!(fault.should_retry());
        assert_eq!(fault.message.as_deref(), Some("Agency server busy"));
        assert!(doc.vehicles.is_empty());
    }

    #[test]
    fn empty_document_decodes_with_no_vehicles() {
        let xml = r#"<body><lastTime time="1000"/></body>"#;
        let doc: FeedDocument = quick_xml::de::from_str(xml).expect("should deserialize");
        assert!(doc.vehicles.is_empty());
        assert_eq!(doc.last_time.unwrap().time, 1000);
    }

    #[test]
    fn unparseable_last_time_is_a_decode_error() {
        let xml = r#"<body><lastTime time="not-a-number"/></body>"#;
        let result: Result<FeedDocument, _> = quick_xml::de::from_str(xml);
        assert!(result.is_err());
    }
}
