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

//! The shapes of the Cloud Spanner resources and messages.
//!
//! Only the fields that need transcoding are declared. All other fields are
//! sent and received as JSON values.

use wire::{Field, Shape};

/// A session in the Cloud Spanner API.
pub static SESSION: Shape = Shape::new(
    "google.spanner.v1.Session",
    &[
        Field::timestamp("createTime"),
        Field::timestamp("approximateLastUseTime"),
    ],
);

/// The request message for `CreateSession`.
pub static CREATE_SESSION_REQUEST: Shape = Shape::new(
    "google.spanner.v1.CreateSessionRequest",
    &[Field::message("session", &SESSION)],
);

/// The response for `ListSessions`.
pub static LIST_SESSIONS_RESPONSE: Shape = Shape::new(
    "google.spanner.v1.ListSessionsResponse",
    &[Field::message("sessions", &SESSION).repeated()],
);

/// Options for read-only transactions.
pub static READ_ONLY: Shape = Shape::new(
    "google.spanner.v1.TransactionOptions.ReadOnly",
    &[
        Field::timestamp("minReadTimestamp"),
        Field::timestamp("readTimestamp"),
    ],
);

/// Options for read-write transactions.
pub static READ_WRITE: Shape = Shape::new(
    "google.spanner.v1.TransactionOptions.ReadWrite",
    &[Field::bytes("multiplexedSessionPreviousTransactionId")],
);

/// Options to use for transactions.
pub static TRANSACTION_OPTIONS: Shape = Shape::new(
    "google.spanner.v1.TransactionOptions",
    &[
        Field::message("readOnly", &READ_ONLY),
        Field::message("readWrite", &READ_WRITE),
    ],
);

/// A token to order the commits in multiplexed sessions.
pub static MULTIPLEXED_SESSION_PRECOMMIT_TOKEN: Shape = Shape::new(
    "google.spanner.v1.MultiplexedSessionPrecommitToken",
    &[Field::bytes("precommitToken")],
);

/// A transaction.
pub static TRANSACTION: Shape = Shape::new(
    "google.spanner.v1.Transaction",
    &[
        Field::bytes("id"),
        Field::timestamp("readTimestamp"),
        Field::message("precommitToken", &MULTIPLEXED_SESSION_PRECOMMIT_TOKEN),
    ],
);

/// Selects the transaction for a read or query.
///
/// Exactly one of `id`, `begin`, or `singleUse` should be set.
pub static TRANSACTION_SELECTOR: Shape = Shape::new(
    "google.spanner.v1.TransactionSelector",
    &[
        Field::bytes("id"),
        Field::message("begin", &TRANSACTION_OPTIONS),
        Field::message("singleUse", &TRANSACTION_OPTIONS),
    ],
);

/// The request message for `BeginTransaction`.
pub static BEGIN_TRANSACTION_REQUEST: Shape = Shape::new(
    "google.spanner.v1.BeginTransactionRequest",
    &[Field::message("options", &TRANSACTION_OPTIONS)],
);

/// The request message for `Commit`.
pub static COMMIT_REQUEST: Shape = Shape::new(
    "google.spanner.v1.CommitRequest",
    &[
        Field::bytes("transactionId"),
        Field::message("singleUseTransaction", &TRANSACTION_OPTIONS),
        Field::message("precommitToken", &MULTIPLEXED_SESSION_PRECOMMIT_TOKEN),
    ],
);

/// Statistics about a commit.
pub static COMMIT_STATS: Shape = Shape::new(
    "google.spanner.v1.CommitResponse.CommitStats",
    &[Field::integer("mutationCount")],
);

/// The response for `Commit`.
pub static COMMIT_RESPONSE: Shape = Shape::new(
    "google.spanner.v1.CommitResponse",
    &[
        Field::timestamp("commitTimestamp"),
        Field::message("commitStats", &COMMIT_STATS),
        Field::message("precommitToken", &MULTIPLEXED_SESSION_PRECOMMIT_TOKEN),
    ],
);

/// The request message for `Rollback`.
pub static ROLLBACK_REQUEST: Shape = Shape::new(
    "google.spanner.v1.RollbackRequest",
    &[Field::bytes("transactionId")],
);

/// The request message for `ExecuteSql`.
pub static EXECUTE_SQL_REQUEST: Shape = Shape::new(
    "google.spanner.v1.ExecuteSqlRequest",
    &[
        Field::message("transaction", &TRANSACTION_SELECTOR),
        Field::bytes("resumeToken"),
        Field::bytes("partitionToken"),
        Field::integer("seqno"),
    ],
);

/// Metadata about a result set.
pub static RESULT_SET_METADATA: Shape = Shape::new(
    "google.spanner.v1.ResultSetMetadata",
    &[Field::message("transaction", &TRANSACTION)],
);

/// Statistics about a result set.
pub static RESULT_SET_STATS: Shape = Shape::new(
    "google.spanner.v1.ResultSetStats",
    &[
        Field::integer("rowCountExact"),
        Field::integer("rowCountLowerBound"),
    ],
);

/// The results of a read or query.
///
/// The rows are JSON values, and are not transcoded.
pub static RESULT_SET: Shape = Shape::new(
    "google.spanner.v1.ResultSet",
    &[
        Field::message("metadata", &RESULT_SET_METADATA),
        Field::message("stats", &RESULT_SET_STATS),
        Field::message("precommitToken", &MULTIPLEXED_SESSION_PRECOMMIT_TOKEN),
    ],
);

/// Encryption information for a backup or database.
pub static ENCRYPTION_INFO: Shape = Shape::opaque("google.spanner.admin.database.v1.EncryptionInfo");

/// A backup of a Cloud Spanner database.
pub static BACKUP: Shape = Shape::new(
    "google.spanner.admin.database.v1.Backup",
    &[
        Field::timestamp("versionTime"),
        Field::timestamp("expireTime"),
        Field::timestamp("createTime"),
        Field::timestamp("maxExpireTime"),
        Field::timestamp("oldestVersionTime"),
        Field::integer("sizeBytes"),
        Field::integer("freeableSizeBytes"),
        Field::integer("exclusiveSizeBytes"),
        Field::message("encryptionInfo", &ENCRYPTION_INFO),
        Field::message("encryptionInformation", &ENCRYPTION_INFO).repeated(),
    ],
);

/// A generic empty message.
pub static EMPTY: Shape = Shape::opaque("google.protobuf.Empty");

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wire::{Record, Timestamp, Value, to_native_value, to_wire_value};

    #[test]
    fn commit_request() -> anyhow::Result<()> {
        let request = Record::new()
            .set("transactionId", bytes::Bytes::from_static(&[1, 2, 3]))
            .set("returnCommitStats", true);
        let wire = to_wire_value(&request, &COMMIT_REQUEST)?;
        assert_eq!(
            wire,
            json!({"transactionId": "AQID", "returnCommitStats": true})
        );
        Ok(())
    }

    #[test]
    fn commit_response() -> anyhow::Result<()> {
        let wire = json!({
            "commitTimestamp": "2014-10-02T15:01:23.045Z",
            "commitStats": {"mutationCount": "9007199254740993"},
        });
        let got = to_native_value(wire.clone(), &COMMIT_RESPONSE)?;
        let want = Record::new()
            .set("commitTimestamp", Timestamp::clamp(1412262083, 45_000_000))
            .set(
                "commitStats",
                Record::new().set("mutationCount", 9007199254740993_i64),
            );
        assert_eq!(got, want);
        assert_eq!(to_wire_value(&got, &COMMIT_RESPONSE)?, wire);
        Ok(())
    }

    #[test]
    fn execute_sql_single_use() -> anyhow::Result<()> {
        let request = Record::new()
            .set("sql", "SELECT 1")
            .set(
                "transaction",
                Record::new().set(
                    "singleUse",
                    Record::new().set(
                        "readOnly",
                        Record::new()
                            .set("minReadTimestamp", Timestamp::clamp(1412262083, 0)),
                    ),
                ),
            )
            .set("seqno", 1_i64);
        let wire = to_wire_value(&request, &EXECUTE_SQL_REQUEST)?;
        assert_eq!(
            wire,
            json!({
                "sql": "SELECT 1",
                "transaction": {"singleUse": {"readOnly": {"minReadTimestamp": "2014-10-02T15:01:23Z"}}},
                "seqno": "1",
            })
        );
        Ok(())
    }

    #[test]
    fn result_set() -> anyhow::Result<()> {
        let wire = json!({
            "metadata": {
                "rowType": {"fields": [{"name": "n", "type": {"code": "INT64"}}]},
                "transaction": {"id": "AQID"},
            },
            "rows": [["1"], ["2"]],
            "stats": {"rowCountExact": "2"},
        });
        let got = to_native_value(wire, &RESULT_SET)?;
        let id = got
            .get("metadata")
            .and_then(Value::as_record)
            .and_then(|m| m.get("transaction"))
            .and_then(Value::as_record)
            .and_then(|t| t.get("id"))
            .and_then(Value::as_bytes);
        assert_eq!(id.map(|b| b.to_vec()), Some(vec![1, 2, 3]));
        // Rows are not declared, INT64 values inside them stay as strings.
        assert_eq!(got.get("rows"), Some(&Value::Json(json!([["1"], ["2"]]))));
        Ok(())
    }

    #[test]
    fn backup() -> anyhow::Result<()> {
        let wire = json!({
            "name": "projects/p/instances/i/backups/b",
            "createTime": "2024-01-02T03:04:05.123456789Z",
            "sizeBytes": "1099511627776",
            "encryptionInfo": {"encryptionType": "GOOGLE_DEFAULT_ENCRYPTION"},
            "encryptionInformation": [],
        });
        let got = to_native_value(wire.clone(), &BACKUP)?;
        assert_eq!(
            got.get("sizeBytes").and_then(Value::as_integer),
            Some(1_099_511_627_776)
        );
        assert_eq!(
            got.get("createTime")
                .and_then(Value::as_timestamp)
                .map(|t| t.nanos()),
            Some(123456789)
        );
        assert_eq!(to_wire_value(&got, &BACKUP)?, wire);
        Ok(())
    }
}
