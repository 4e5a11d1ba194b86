// NOTE: Messages are within Threads
use crate::{Error, Result};
use async_openai::types::{CreateMessageRequest, MessageContent, MessageObject};

const USER_ROLE: &str = "user";

// region:       -- Message Constructors

pub fn create_user_message(content: impl Into<String>) -> CreateMessageRequest {
    CreateMessageRequest {
        role: USER_ROLE.to_string(),
        content: content.into(),
        ..Default::default()
    }
}

// endregion:    -- Message Constructors

// region:       -- Content Extractor

/// Text value of the first content item. Image content is an error.
pub fn get_text_content(message_obj: MessageObject) -> Result<String> {
    let msg_content = message_obj
        .content
        .into_iter()
        .next()
        .ok_or(Error::NoMessageInMessageObjectContent)?;

    let msg_content_text = match msg_content {
        MessageContent::Text(inner) => inner.text.value,
        MessageContent::ImageFile(_) => return Err(Error::MessageImageNotSupported),
    };

    Ok(msg_content_text)
}

// endregion:    -- Content Extractor

// region:       -- Tests


// endregion:    -- Tests
