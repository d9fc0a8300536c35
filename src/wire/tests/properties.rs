// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    use google_rest_wire::{Field, Record, Shape, Timestamp, Value};
    type Result = anyhow::Result<()>;

    static ITEM: Shape = Shape::new(
        "Item",
        &[Field::bytes("payload"), Field::timestamp("updateTime")],
    );
    static CONTAINER: Shape = Shape::new(
        "Container",
        &[
            Field::message("items", &ITEM).repeated(),
            Field::integer("generation"),
        ],
    );

    fn item(payload: &'static [u8], seconds: i64, nanos: i32) -> anyhow::Result<Value> {
        Ok(Value::from(
            Record::new()
                .set("payload", ::bytes::Bytes::from_static(payload))
                .set("updateTime", Timestamp::new(seconds, nanos)?),
        ))
    }

    #[test]
    fn structural_idempotence() -> Result {
        let native = Record::new()
            .set("name", "containers/c1")
            .set("generation", i64::MAX)
            .set(
                "items",
                vec![
                    item(b"", 0, 0)?,
                    item(&[0xff, 0x00, 0x7f], 1412262083, 45_000_000)?,
                    Value::from(Record::new().set("payload", ::bytes::Bytes::from_static(b"abc"))),
                    Value::from(Record::new()),
                ],
            );
        let wire = google_rest_wire::to_wire_value(&native, &CONTAINER)?;
        assert_eq!(
            wire,
            json!({
                "name": "containers/c1",
                "generation": "9223372036854775807",
                "items": [
                    {"payload": "", "updateTime": "1970-01-01T00:00:00Z"},
                    {"payload": "/wB/", "updateTime": "2014-10-02T15:01:23.045Z"},
                    {"payload": "YWJj"},
                    {},
                ],
            })
        );
        let got = google_rest_wire::to_native_value(wire.clone(), &CONTAINER)?;
        assert_eq!(got, native);
        assert_eq!(google_rest_wire::to_wire_value(&got, &CONTAINER)?, wire);
        Ok(())
    }

    #[test]
    fn empty_array_survives() -> Result {
        let native = Record::new().set("items", Vec::<Value>::new());
        let wire = google_rest_wire::to_wire_value(&native, &CONTAINER)?;
        assert_eq!(wire, json!({"items": []}));
        assert_eq!(google_rest_wire::to_native_value(wire, &CONTAINER)?, native);
        Ok(())
    }

    #[test]
    fn absence_is_preserved() -> Result {
        let wire = google_rest_wire::to_wire_value(&Record::new(), &CONTAINER)?;
        assert_eq!(wire, json!({}));

        let native = google_rest_wire::to_native_value(json!({"items": [{}]}), &CONTAINER)?;
        let items = native.get("items").and_then(Value::as_list);
        let first = items.and_then(|l| l.first()).and_then(Value::as_record);
        assert_eq!(first, Some(&Record::new()));
        assert!(!native.contains("generation"));
        Ok(())
    }

    #[test]
    fn commit_transaction_id() -> Result {
        static COMMIT: Shape = Shape::new("CommitRequest", &[Field::bytes("transactionId")]);
        let native = Record::new().set("transactionId", ::bytes::Bytes::from_static(&[1, 2, 3]));
        let wire = google_rest_wire::to_wire_value(&native, &COMMIT)?;
        assert_eq!(wire, json!({"transactionId": "AQID"}));
        assert_eq!(google_rest_wire::to_native_value(wire, &COMMIT)?, native);
        Ok(())
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(-1)]
    #[test_case(1_i128 << 53; "two to the 53")]
    #[test_case((1_i128 << 53) - 1; "two to the 53 minus 1")]
    #[test_case(i64::MAX as i128; "i64 max")]
    #[test_case(i64::MIN as i128; "i64 min")]
    #[test_case(u64::MAX as i128; "u64 max")]
    fn integer_roundtrip(value: i128) -> Result {
        let text = google_rest_wire::integer::to_wire(value);
        assert_eq!(google_rest_wire::integer::from_wire(&text)?, value);
        Ok(())
    }

    #[test]
    fn timestamp_roundtrip() -> Result {
        let ts = google_rest_wire::timestamp::from_wire("2014-10-02T15:01:23.045Z")?;
        assert_eq!(ts, Timestamp::new(1412262083, 45_000_000)?);
        assert_eq!(google_rest_wire::timestamp::to_wire(&ts), "2014-10-02T15:01:23.045Z");
        Ok(())
    }

    #[test]
    fn malformed_scalars() {
        let err = google_rest_wire::bytes::decode("A").unwrap_err();
        assert!(err.is_malformed_wire_text(), "{err:?}");
        let err = google_rest_wire::integer::from_wire("12a3").unwrap_err();
        assert!(err.is_malformed_wire_integer(), "{err:?}");
        let err = google_rest_wire::timestamp::from_wire("2014-13-02T15:01:23Z").unwrap_err();
        assert!(err.is_malformed_wire_timestamp(), "{err:?}");
    }

    #[test]
    fn error_reports_path() {
        let wire = json!({"items": [{}, {"payload": "AQ"}]});
        let err = google_rest_wire::to_native_value(wire, &CONTAINER).unwrap_err();
        assert!(err.is_malformed_wire_text(), "{err:?}");
        assert_eq!(err.path(), "items[1].payload");
    }
}
