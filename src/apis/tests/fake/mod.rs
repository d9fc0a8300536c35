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

//! A fake requester to verify the requests created by the clients.

use google_rest_apis::Result;
use gax::request::{HttpRequest, Requester};
use std::sync::{Arc, Mutex};

/// Records each request and returns a canned response.
#[derive(Clone, Debug, Default)]
pub struct FakeRequester {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    response: serde_json::Value,
}

impl FakeRequester {
    pub fn new(response: serde_json::Value) -> Self {
        Self {
            requests: Arc::default(),
            response,
        }
    }

    /// The requests received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("poisoned mutex").clone()
    }

    /// The only request received so far.
    pub fn single_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "{requests:?}");
        requests.into_iter().next().expect("exactly one request")
    }
}

impl Requester for FakeRequester {
    async fn execute(&self, request: HttpRequest) -> Result<serde_json::Value> {
        self.requests.lock().expect("poisoned mutex").push(request);
        Ok(self.response.clone())
    }
}

/// Converts a list of `(&str, &str)` pairs to query parameters.
pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
