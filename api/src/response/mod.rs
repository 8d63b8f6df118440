use serde::Serialize;

/// Standardized wrapper for successful JSON responses.
///
/// ```json
/// {
///   "success": true,
///   "data": { "id": "6f1c…", "title": "Hello" },
///   "message": "Post created successfully"
/// }
/// ```
///
/// Failures never use this type; they are rendered from
/// [`crate::error::ApiError`] as an [`ErrorResponse`].
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

impl ApiResponse<()> {
    /// Success response whose `data` is `null`.
    pub fn success_without_data(message: impl Into<String>) -> Self {
        Self::success((), message)
    }
}

/// Uniform error envelope returned on every failure path.
///
/// ```json
/// {
///   "success": false,
///   "statusCode": 403,
///   "message": "You are not allowed to perform this action"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code,
            message: message.into(),
        }
    }
}
