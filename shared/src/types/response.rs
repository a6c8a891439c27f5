//! The uniform API response envelope
//!
//! Every JSON endpoint answers with the same wrapper:
//! `{"errno": <code>, "errmsg": <message>, "data": <payload>}`. `errno` is
//! drawn from a small fixed table ([`ErrorCode`]), `errmsg` defaults to the
//! code's canned Chinese message unless the caller overrides it, and `data`
//! is omitted entirely when there is no payload.

use serde::{Deserialize, Serialize};

/// Fixed error-code table for the response envelope.
///
/// The numeric values are part of the wire contract; clients switch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ErrorCode {
    /// Request handled successfully
    Ok,
    /// Resource already exists
    DataExists,
    /// Stored data is inconsistent or corrupt
    DataError,
    /// Requested resource does not exist
    NoData,
    /// Missing or expired session
    SessionError,
    /// Caller lacks the required role or permission
    RoleError,
    /// Request parameters failed validation
    ParamError,
    /// Unclassified server-side failure
    UnknownError,
}

impl ErrorCode {
    /// Numeric wire value of the code.
    pub fn errno(self) -> i32 {
        match self {
            ErrorCode::Ok => 0,
            ErrorCode::DataExists => 4001,
            ErrorCode::DataError => 4002,
            ErrorCode::NoData => 4004,
            ErrorCode::SessionError => 4101,
            ErrorCode::RoleError => 4102,
            ErrorCode::ParamError => 4201,
            ErrorCode::UnknownError => 4500,
        }
    }

    /// Canned Chinese message used when the caller does not override `errmsg`.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorCode::Ok => "成功",
            ErrorCode::DataExists => "数据已存在",
            ErrorCode::DataError => "数据错误",
            ErrorCode::NoData => "无数据",
            ErrorCode::SessionError => "用户未登录",
            ErrorCode::RoleError => "用户权限错误",
            ErrorCode::ParamError => "参数错误",
            ErrorCode::UnknownError => "未知错误",
        }
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> i32 {
        code.errno()
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Ok),
            4001 => Ok(ErrorCode::DataExists),
            4002 => Ok(ErrorCode::DataError),
            4004 => Ok(ErrorCode::NoData),
            4101 => Ok(ErrorCode::SessionError),
            4102 => Ok(ErrorCode::RoleError),
            4201 => Ok(ErrorCode::ParamError),
            4500 => Ok(ErrorCode::UnknownError),
            other => Err(format!("unknown errno: {}", other)),
        }
    }
}

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Numeric status code, 0 on success
    pub errno: i32,

    /// Human-readable message (Chinese-language product strings)
    pub errmsg: String,

    /// Response payload (omitted when empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload.
    pub fn ok(data: T) -> Self {
        Self {
            errno: ErrorCode::Ok.errno(),
            errmsg: ErrorCode::Ok.default_message().to_string(),
            data: Some(data),
        }
    }

    /// Successful response with a custom message and no payload.
    pub fn ok_message(errmsg: impl Into<String>) -> Self {
        Self {
            errno: ErrorCode::Ok.errno(),
            errmsg: errmsg.into(),
            data: None,
        }
    }

    /// Error response using the code's canned message.
    pub fn err(code: ErrorCode) -> Self {
        Self {
            errno: code.errno(),
            errmsg: code.default_message().to_string(),
            data: None,
        }
    }

    /// Error response with an overriding message.
    pub fn err_message(code: ErrorCode, errmsg: impl Into<String>) -> Self {
        Self {
            errno: code.errno(),
            errmsg: errmsg.into(),
            data: None,
        }
    }

    /// Check if the response is successful
    pub fn is_ok(&self) -> bool {
        self.errno == ErrorCode::Ok.errno()
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Health check response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service identifier
    pub service: String,

    /// Server version
    pub version: String,
}
