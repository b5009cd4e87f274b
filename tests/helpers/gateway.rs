#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use vigil_notify::api::{ApiResult, NotificationGateway};
use vigil_notify::models::NotificationPage;

use super::notifications::empty_page;

/// Scripted gateway double: pops pre-programmed responses in order and
/// counts calls. Unscripted calls succeed (empty page / unit).
#[derive(Default)]
pub struct ScriptedGateway {
    list_responses: Mutex<Vec<ApiResult<NotificationPage>>>,
    mark_read_responses: Mutex<Vec<ApiResult<()>>>,
    mark_all_responses: Mutex<Vec<ApiResult<()>>>,
    list_calls: Mutex<usize>,
    mark_read_calls: Mutex<Vec<String>>,
    mark_all_calls: Mutex<usize>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, response: ApiResult<NotificationPage>) {
        self.list_responses.lock().unwrap().push(response);
    }

    pub fn push_mark_read(&self, response: ApiResult<()>) {
        self.mark_read_responses.lock().unwrap().push(response);
    }

    pub fn push_mark_all(&self, response: ApiResult<()>) {
        self.mark_all_responses.lock().unwrap().push(response);
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn mark_read_calls(&self) -> Vec<String> {
        self.mark_read_calls.lock().unwrap().clone()
    }

    pub fn mark_all_calls(&self) -> usize {
        *self.mark_all_calls.lock().unwrap()
    }
}

#[async_trait]
impl NotificationGateway for ScriptedGateway {
    async fn list_notifications(&self) -> ApiResult<NotificationPage> {
        *self.list_calls.lock().unwrap() += 1;
        let mut queue = self.list_responses.lock().unwrap();
        if queue.is_empty() {
            Ok(empty_page())
        } else {
            queue.remove(0)
        }
    }

    async fn mark_read(&self, id: &str) -> ApiResult<()> {
        self.mark_read_calls.lock().unwrap().push(id.to_string());
        let mut queue = self.mark_read_responses.lock().unwrap();
        if queue.is_empty() {
            Ok(())
        } else {
            queue.remove(0)
        }
    }

    async fn mark_all_read(&self) -> ApiResult<()> {
        *self.mark_all_calls.lock().unwrap() += 1;
        let mut queue = self.mark_all_responses.lock().unwrap();
        if queue.is_empty() {
            Ok(())
        } else {
            queue.remove(0)
        }
    }
}
