//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`logger`] - 日志初始化
//! - [`validation`] - 输入校验

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
