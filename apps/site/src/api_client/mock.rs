//! Recording `InstituteApi` double for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, InstituteApi};
use crate::models::catalog::{Course, FacultyMember};
use crate::models::enquiry::{AdmissionApplication, ContactMessage};
use crate::models::library::{Book, LoginRequest, RegisterRequest};

/// Canned backend: every call is appended to `calls`, and each operation
/// answers from the corresponding field (`None` means "backend error").
#[derive(Default)]
pub struct RecordingApi {
    pub calls: Mutex<Vec<String>>,
    pub courses: Option<Vec<Course>>,
    pub faculty: Option<Vec<FacultyMember>>,
    pub books: Option<Vec<Book>>,
    pub token: Option<String>,
    pub contact_ack: Option<Option<String>>,
    pub admission_ok: bool,
    /// Replacement record for a successful borrow/return; `None` fails.
    pub book_update: Option<Book>,
    pub failure_message: Option<String>,
    /// Status of every failed call; 400 when unset.
    pub failure_status: Option<u16>,
}

impl RecordingApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock mutex should lock").clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls
            .lock()
            .expect("mock mutex should lock")
            .push(call.into());
    }

    fn failure(&self) -> ApiError {
        ApiError::Api {
            status: self.failure_status.unwrap_or(400),
            message: self.failure_message.clone(),
        }
    }

    fn answer<T: Clone>(&self, value: &Option<T>) -> Result<T, ApiError> {
        value.clone().ok_or_else(|| self.failure())
    }
}

pub fn book(id: &str, title: &str, author: &str, quantity: i64) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        quantity,
        image: String::new(),
    }
}

#[async_trait]
impl InstituteApi for RecordingApi {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.record("list_courses");
        self.answer(&self.courses)
    }

    async fn list_faculty(&self) -> Result<Vec<FacultyMember>, ApiError> {
        self.record("list_faculty");
        self.answer(&self.faculty)
    }

    async fn apply_admission(&self, application: &AdmissionApplication) -> Result<(), ApiError> {
        self.record(format!("apply_admission:{}", application.email));
        if self.admission_ok {
            Ok(())
        } else {
            Err(self.failure())
        }
    }

    async fn send_contact(&self, message: &ContactMessage) -> Result<Option<String>, ApiError> {
        self.record(format!("send_contact:{}", message.message));
        self.answer(&self.contact_ack)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        self.record(format!("register:{}", request.email));
        self.answer(&self.token)
    }

    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        self.record(format!("login:{}", request.email));
        self.answer(&self.token)
    }

    async fn list_books(&self, token: &str) -> Result<Vec<Book>, ApiError> {
        self.record(format!("list_books:{token}"));
        self.answer(&self.books)
    }

    async fn borrow_book(&self, token: &str, book_id: &str) -> Result<Book, ApiError> {
        self.record(format!("borrow_book:{token}:{book_id}"));
        self.answer(&self.book_update)
    }

    async fn return_book(&self, token: &str, book_id: &str) -> Result<Book, ApiError> {
        self.record(format!("return_book:{token}:{book_id}"));
        self.answer(&self.book_update)
    }
}
