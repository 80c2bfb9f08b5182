use std::borrow::Cow;

use rmcp::ErrorData;
use rmcp::model::ErrorCode;

pub(crate) fn invalid_params(message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code: ErrorCode::INVALID_PARAMS,
        message: message.into(),
        data: None,
    }
}
