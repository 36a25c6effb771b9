//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// API 响应结构，所有成功响应都包在 `data` 字段里
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_wraps_data() {
        let value = serde_json::to_value(ApiResponse::success(vec![1, 2, 3])).unwrap();
        assert_eq!(value, serde_json::json!({ "data": [1, 2, 3] }));
    }
}
