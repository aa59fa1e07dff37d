//! # max-messenger
//!
//! Typed client for the MAX messenger platform Bot API
//! (<https://dev.max.ru/docs-api>).
//!
//! ```no_run
//! use max_messenger::{Client, Config, SendMessageOptions};
//!
//! # async fn run() -> Result<(), max_messenger::MaxError> {
//! let client = Client::new(Config::new("bot-token"))?;
//! let me = client.me().get().await?;
//! client
//!     .messages()
//!     .send(42, &format!("hello from {}", me.name), &SendMessageOptions::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod keyboard;
pub mod response;
pub mod transport;
pub mod types;

pub use api::{
    Chats, EditMessageOptions, Me, Messages, PollParams, SendMessageOptions, Updates,
    WebhookOptions,
};
pub use client::Client;
pub use config::Config;
pub use error::MaxError;
pub use keyboard::{Button, ButtonKind, InlineKeyboard};
pub use types::{Chat, Message, MessageFormat, Update, UpdateKind, User};
