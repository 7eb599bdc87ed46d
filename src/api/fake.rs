//! In-memory todo service used by the planner tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::{ApiError, ApiResult, TodoApi};
use crate::models::{GenerateRequest, Priority, TaskId, TaskItem};

#[derive(Default)]
pub struct FakeTodoApi {
    items: RefCell<Vec<TaskItem>>,
    next_id: Cell<u32>,
    failure: RefCell<Option<ApiError>>,
    gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    batches: RefCell<VecDeque<Vec<TaskItem>>>,
    requests: RefCell<Vec<GenerateRequest>>,
    calls: RefCell<Vec<&'static str>>,
}

pub fn item(id: &str, title: &str) -> TaskItem {
    TaskItem {
        id: TaskId::new(id),
        title: title.to_string(),
        vibe: Some("study".to_string()),
        priority: Priority::Medium,
        completed: false,
    }
}

impl FakeTodoApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<TaskItem>) -> Self {
        let api = Self::new();
        *api.items.borrow_mut() = items;
        api
    }

    /// Every call fails with `error` until cleared with `None`
    pub fn fail_with(&self, error: Option<ApiError>) {
        *self.failure.borrow_mut() = error;
    }

    /// The next generate call waits until the returned sender fires
    pub fn hold_next_generation(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }

    /// The next generate call returns exactly `batch`
    pub fn queue_batch(&self, batch: Vec<TaskItem>) {
        self.batches.borrow_mut().push_back(batch);
    }

    pub fn server_items(&self) -> Vec<TaskItem> {
        self.items.borrow().clone()
    }

    pub fn generate_requests(&self) -> Vec<GenerateRequest> {
        self.requests.borrow().clone()
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == name).count()
    }

    fn enter(&self, name: &'static str) -> ApiResult<()> {
        self.calls.borrow_mut().push(name);
        match self.failure.borrow().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn not_found(id: &TaskId) -> ApiError {
        ApiError::Status {
            status: 404,
            url: format!("http://fake/api/todos/{}", id),
        }
    }

    fn mint(&self, request: &GenerateRequest) -> Vec<TaskItem> {
        (0..request.count)
            .map(|n| {
                let id = self.next_id.get() + 1;
                self.next_id.set(id);
                TaskItem {
                    id: TaskId::new(format!("gen-{}", id)),
                    title: format!("{} #{}", request.prompt, n + 1),
                    vibe: Some(request.vibe.clone()),
                    priority: match n % 3 {
                        0 => Priority::High,
                        1 => Priority::Medium,
                        _ => Priority::Low,
                    },
                    completed: false,
                }
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeTodoApi {
    async fn list_todos(&self) -> ApiResult<Vec<TaskItem>> {
        self.enter("list")?;
        Ok(self.server_items())
    }

    async fn generate_todos(&self, request: &GenerateRequest) -> ApiResult<Vec<TaskItem>> {
        self.calls.borrow_mut().push("generate");
        self.requests.borrow_mut().push(request.clone());

        let gate = self.gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        // Failure is checked on settle so a held request can be failed later
        if let Some(e) = self.failure.borrow().clone() {
            return Err(e);
        }

        let queued = self.batches.borrow_mut().pop_front();
        let batch = queued.unwrap_or_else(|| self.mint(request));
        let mut items = self.items.borrow_mut();
        for (i, item) in batch.iter().enumerate() {
            items.insert(i, item.clone());
        }
        Ok(batch)
    }

    async fn set_completed(&self, id: &TaskId, completed: bool) -> ApiResult<TaskItem> {
        self.enter("update")?;
        let mut items = self.items.borrow_mut();
        let item = items.iter_mut().find(|i| &i.id == id).ok_or_else(|| Self::not_found(id))?;
        item.completed = completed;
        Ok(item.clone())
    }

    async fn delete_todo(&self, id: &TaskId) -> ApiResult<()> {
        self.enter("delete")?;
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|i| &i.id != id);
        if items.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
