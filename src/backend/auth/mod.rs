//! Authentication Module
//!
//! User registration, login and session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── users.rs    - User model and database operations
//! ├── sessions.rs - JWT token management
//! └── handlers/   - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Registration handler (multipart)
//!     ├── login.rs    - Login handler
//!     └── me.rs       - Current-user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: multipart profile + optional picture → user created
//! 2. **Login**: email and password verified → signed token returned
//! 3. **Protected routes**: token verified by the request gate, user id
//!    attached to the request for downstream handlers
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//! - Tokens are stateless HS256 JWTs with a fixed 30-day validity
//! - Login failures return one 401 message (no account enumeration)

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, FriendView, LoginRequest, UserView};
pub use handlers::{login, me, register};
