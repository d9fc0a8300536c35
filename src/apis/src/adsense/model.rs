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

//! The shapes of the AdSense Management resources.

use wire::{Field, Shape};

/// An AdSense account.
pub static ACCOUNT: Shape = Shape::new("adsense.v2.Account", &[Field::timestamp("createTime")]);

/// The response for `ListAccounts`.
pub static LIST_ACCOUNTS_RESPONSE: Shape = Shape::new(
    "adsense.v2.ListAccountsResponse",
    &[Field::message("accounts", &ACCOUNT).repeated()],
);

/// The result of a generated report.
///
/// The cells in `rows`, `totals`, and `averages` are JSON values.
pub static REPORT_RESULT: Shape = Shape::new(
    "adsense.v2.ReportResult",
    &[Field::integer("totalMatchedRows")],
);

/// A payment or a pending payment.
///
/// Amounts are formatted strings, and dates are `google.type.Date` values.
pub static PAYMENT: Shape = Shape::opaque("adsense.v2.Payment");

/// The response for `ListPayments`.
pub static LIST_PAYMENTS_RESPONSE: Shape = Shape::new(
    "adsense.v2.ListPaymentsResponse",
    &[Field::message("payments", &PAYMENT).repeated()],
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    use wire::{Value, to_native_value};

    #[test_case(json!("0"), 0; "zero")]
    #[test_case(json!("9223372036854775807"), i64::MAX as i128; "max")]
    #[test_case(json!(42), 42; "json number")]
    fn total_matched_rows(input: serde_json::Value, want: i128) -> anyhow::Result<()> {
        let wire = json!({"totalMatchedRows": input, "rows": []});
        let got = to_native_value(wire, &REPORT_RESULT)?;
        assert_eq!(
            got.get("totalMatchedRows").and_then(Value::as_integer),
            Some(want)
        );
        Ok(())
    }

    #[test]
    fn total_matched_rows_malformed() {
        let wire = json!({"totalMatchedRows": "1,000"});
        let err = to_native_value(wire, &REPORT_RESULT).unwrap_err();
        assert!(err.is_malformed_wire_integer(), "{err:?}");
        assert_eq!(err.path(), "totalMatchedRows");
    }

    #[test]
    fn payments() -> anyhow::Result<()> {
        let wire = json!({"payments": [
            {"name": "accounts/pub-123/payments/unpaid", "amount": "USD 1.23"},
        ]});
        let got = to_native_value(wire, &LIST_PAYMENTS_RESPONSE)?;
        let payments = got.get("payments").and_then(Value::as_list);
        assert_eq!(payments.map(|p| p.len()), Some(1));
        Ok(())
    }
}
