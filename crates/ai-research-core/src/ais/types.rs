use derive_more::{Deref, Display, From};

// Each remote object gets its own id type so a ThreadId can never be
// passed where an AssistantId is expected.
#[derive(Debug, Clone, PartialEq, Eq, From, Deref, Display)]
pub struct AssistantId(String);

#[derive(Debug, Clone, PartialEq, Eq, From, Deref, Display)]
pub struct ThreadId(String);

#[derive(Debug, Clone, PartialEq, Eq, From, Deref, Display)]
pub struct MessageId(String);

#[derive(Debug, Clone, PartialEq, Eq, From, Deref, Display)]
pub struct RunId(String);
