//! In-memory fakes for the client's I/O seams.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use serde_json::Value;

use crate::api::{ApiClient, ApiError, ApiResponse, ApiResult, HttpMethod};
use crate::data::{LoginResponse, Member, Rank};
use crate::id::MemberId;
use crate::time::Timer;

#[derive(Clone)]
enum Scripted {
    Reply(ApiResponse),
    Offline(String),
    Hang,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub endpoint: String,
    pub body: Option<Value>,
}

/// Scripted [`ApiClient`]; unscripted endpoints answer 404.
#[derive(Default)]
pub struct MockApi {
    routes: HashMap<String, Scripted>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, endpoint: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            endpoint.to_string(),
            Scripted::Reply(ApiResponse::new(status, body)),
        );
        self
    }

    pub fn offline(mut self, endpoint: &str) -> Self {
        self.routes.insert(
            endpoint.to_string(),
            Scripted::Offline(format!("{endpoint}: connection refused")),
        );
        self
    }

    pub fn hang(mut self, endpoint: &str) -> Self {
        self.routes.insert(endpoint.to_string(), Scripted::Hang);
        self
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.endpoint == endpoint)
            .count()
    }

    pub fn bodies(&self, endpoint: &str) -> Vec<Value> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.endpoint == endpoint)
            .filter_map(|call| call.body.clone())
            .collect()
    }

    pub fn methods(&self, endpoint: &str) -> Vec<HttpMethod> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.endpoint == endpoint)
            .map(|call| call.method)
            .collect()
    }

    async fn answer(&self, call: RecordedCall) -> ApiResult<ApiResponse> {
        let scripted = self.routes.get(&call.endpoint).cloned();
        self.calls.borrow_mut().push(call);

        match scripted {
            Some(Scripted::Reply(response)) => Ok(response),
            Some(Scripted::Offline(reason)) => {
                Err(ApiError::NetworkError(gloo_net::Error::GlooError(reason)))
            }
            Some(Scripted::Hang) => futures::future::pending().await,
            None => Ok(ApiResponse::new(404, "")),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for MockApi {
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<ApiResponse> {
        self.answer(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            body: None,
        })
        .await
    }

    async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<ApiResponse>
    where
        B: serde::Serialize,
    {
        let body = serde_json::to_value(body).expect("test bodies serialize");
        self.answer(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            body: Some(body),
        })
        .await
    }
}

/// Timer whose deadline has always already passed.
pub struct ExpiredTimer;

impl Timer for ExpiredTimer {
    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        futures::future::ready(()).boxed_local()
    }
}

/// Timer that never fires.
pub struct StoppedTimer;

impl Timer for StoppedTimer {
    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        futures::future::pending().boxed_local()
    }
}

pub fn member(id: &str, first: &str, last: &str, rank: Rank) -> Member {
    Member {
        id: MemberId::from(id),
        username: first.to_lowercase(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        rank,
        admin: false,
        supervisor_id: None,
    }
}

pub fn login_response(id: &str, admin: bool) -> LoginResponse {
    let mut me = member(id, "Ada", "Lovelace", Rank::TechnicalSergeant);
    me.admin = admin;

    let mut report = member("m-9", "Grace", "Hopper", Rank::SeniorAirman);
    report.supervisor_id = Some(me.id.clone());

    LoginResponse {
        member: me,
        qualifications: Vec::new(),
        subordinates: vec![report],
    }
}

pub fn login_body(id: &str, admin: bool) -> String {
    serde_json::to_string(&login_response(id, admin)).expect("fixture serializes")
}

/// Login payload as the Go backend writes it for a member with no
/// qualifications or subordinates: nil slices become `null` and an unset
/// supervisor is left out.
pub fn backend_login_body(id: &str) -> String {
    format!(
        r#"{{"member":{{"id":"{id}","username":"ada","first_name":"Ada","last_name":"Lovelace","rank":"TSgt","admin":false}},"qualifications":null,"subordinates":null}}"#
    )
}
