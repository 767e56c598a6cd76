//! # Mock Repository & Testing Guide
//!
//! `MockRepository<T>` implements the same [`Repository<T>`](crate::Repository) contract as the
//! real store but answers from a queue of expectations. Use it to test code that sits *on top of*
//! a repository (clients, HTTP handlers) without building real records or caring about ids.
//!
//! ## When to use Mocks vs the Real Store
//!
//! | Feature | MockRepository | ResourceStore |
//! |---------|----------------|---------------|
//! | **State** | None, answers are scripted | Real records and id counter |
//! | **Call order** | Asserted | Irrelevant |
//! | **Payloads** | Checked with `with` / `withf` | Applied |
//! | **Use Case** | Testing logic *around* the repository | Testing store semantics or the full system |
//!
//! ## Example
//!
//! ```rust
//! use resource_store::mock::MockRepository;
//! use resource_store::{Repository, StoreEntity};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Tag { id: u64, name: String }
//!
//! impl StoreEntity for Tag {
//!     type Id = u64; type Create = String; type Update = String; type Query = String;
//!     fn from_create_params(id: u64, name: String) -> Self { Self { id, name } }
//!     fn on_update(&mut self, name: String) { self.name = name; }
//!     fn matches(&self, query: &String) -> bool { &self.name == query }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockRepository::<Tag>::new();
//!     mock.expect_get(7).return_value(None);
//!     mock.expect_search()
//!         .with("rust".to_string())
//!         .return_value(vec![]);
//!
//!     assert!(mock.get(&7).await.is_none());
//!     assert!(mock.search(&"rust".to_string()).await.is_empty());
//!     mock.verify();
//! }
//! ```

use crate::entity::StoreEntity;
use crate::repository::Repository;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// Assertion run against the payload of a call. Panics on mismatch.
type Checker<P> = Box<dyn Fn(&P) + Send>;

/// A scripted call and the answer to give.
enum Expectation<T: StoreEntity> {
    List {
        response: Vec<T>,
    },
    Get {
        id: T::Id,
        response: Option<T>,
    },
    Create {
        check: Option<Checker<T::Create>>,
        response: T,
    },
    Update {
        id: T::Id,
        check: Option<Checker<T::Update>>,
        response: Option<T>,
    },
    Delete {
        id: T::Id,
        response: bool,
    },
    Search {
        check: Option<Checker<T::Query>>,
        response: Vec<T>,
    },
}

impl<T: StoreEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::List { .. } => "list",
            Expectation::Get { .. } => "get",
            Expectation::Create { .. } => "create",
            Expectation::Update { .. } => "update",
            Expectation::Delete { .. } => "delete",
            Expectation::Search { .. } => "search",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A repository that replays expectations in order.
///
/// Panics when a call arrives that does not match the next expectation (wrong operation,
/// wrong id, or a payload rejected by [`ExpectationBuilder::with`] / [`ExpectationBuilder::withf`]),
/// which fails the surrounding test.
pub struct MockRepository<T: StoreEntity> {
    expectations: Queue<T>,
}

impl<T: StoreEntity> MockRepository<T> {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Expects a `list` call.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, (), Vec<T>> {
        self.builder("list", |_, response| Expectation::List { response })
    }

    /// Expects a `get` call for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, (), Option<T>> {
        self.builder("get", move |_, response| Expectation::Get { id, response })
    }

    /// Expects a `create` call. Use `with`/`withf` to check the create payload.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Create, T> {
        self.builder("create", |check, response| Expectation::Create { check, response })
    }

    /// Expects an `update` call for `id`. Use `with`/`withf` to check the patch.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T::Update, Option<T>> {
        self.builder("update", move |check, response| Expectation::Update {
            id,
            check,
            response,
        })
    }

    /// Expects a `delete` call for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, (), bool> {
        self.builder("delete", move |_, response| Expectation::Delete { id, response })
    }

    /// Expects a `search` call. Use `with`/`withf` to check the query.
    pub fn expect_search(&mut self) -> ExpectationBuilder<T, T::Query, Vec<T>> {
        self.builder("search", |check, response| Expectation::Search { check, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<P, R>(
        &self,
        call: &'static str,
        make: impl FnOnce(Option<Checker<P>>, R) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, P, R> {
        ExpectationBuilder {
            call,
            check: None,
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    fn next(&self, call: &str) -> Expectation<T> {
        let mut exps = self.expectations.lock().unwrap();
        match exps.pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected {} call: no expectations left", call),
        }
    }
}

impl<T: StoreEntity> Default for MockRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder returned by the `expect_*` methods. `P` is the payload the call carries
/// (`()` for calls that only take an id or nothing).
pub struct ExpectationBuilder<T: StoreEntity, P, R> {
    call: &'static str,
    check: Option<Checker<P>>,
    make: Box<dyn FnOnce(Option<Checker<P>>, R) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: StoreEntity, P: 'static, R> ExpectationBuilder<T, P, R> {
    /// Requires the call's payload to equal `expected`.
    pub fn with(mut self, expected: P) -> Self
    where
        P: PartialEq + Debug + Send,
    {
        let call = self.call;
        self.check = Some(Box::new(move |actual: &P| {
            assert_eq!(actual, &expected, "{} called with unexpected payload", call);
        }));
        self
    }

    /// Requires `predicate` to hold for the call's payload.
    pub fn withf(mut self, predicate: impl Fn(&P) -> bool + Send + 'static) -> Self {
        let call = self.call;
        self.check = Some(Box::new(move |actual: &P| {
            assert!(predicate(actual), "{} called with unexpected payload", call);
        }));
        self
    }

    /// Sets the value the mocked call returns.
    pub fn return_value(self, response: R) {
        let ExpectationBuilder {
            check,
            make,
            expectations,
            ..
        } = self;
        let mut exps = expectations.lock().unwrap();
        exps.push_back(make(check, response));
    }
}

fn mismatch<T: StoreEntity>(call: &str, expected: &Expectation<T>) -> ! {
    panic!("Unexpected {} call: expected {}", call, expected.name())
}

fn run_check<P>(check: Option<Checker<P>>, payload: &P) {
    if let Some(check) = check {
        check(payload);
    }
}

#[async_trait]
impl<T: StoreEntity> Repository<T> for MockRepository<T> {
    async fn list(&self) -> Vec<T> {
        match self.next("list") {
            Expectation::List { response } => response,
            other => mismatch("list", &other),
        }
    }

    async fn get(&self, id: &T::Id) -> Option<T> {
        match self.next("get") {
            Expectation::Get { id: expected, response } => {
                assert_eq!(&expected, id, "get called with unexpected id");
                response
            }
            other => mismatch("get", &other),
        }
    }

    async fn create(&self, params: T::Create) -> T {
        match self.next("create") {
            Expectation::Create { check, response } => {
                run_check(check, &params);
                response
            }
            other => mismatch("create", &other),
        }
    }

    async fn update(&self, id: &T::Id, update: T::Update) -> Option<T> {
        match self.next("update") {
            Expectation::Update {
                id: expected,
                check,
                response,
            } => {
                assert_eq!(&expected, id, "update called with unexpected id");
                run_check(check, &update);
                response
            }
            other => mismatch("update", &other),
        }
    }

    async fn delete(&self, id: &T::Id) -> bool {
        match self.next("delete") {
            Expectation::Delete { id: expected, response } => {
                assert_eq!(&expected, id, "delete called with unexpected id");
                response
            }
            other => mismatch("delete", &other),
        }
    }

    async fn search(&self, query: &T::Query) -> Vec<T> {
        match self.next("search") {
            Expectation::Search { check, response } => {
                run_check(check, query);
                response
            }
            other => mismatch("search", &other),
        }
    }
}
