// Data models matching the frontend TypeScript types

pub mod chat;
pub mod dashboard;

pub use chat::{
    ChatMessage, ChatSession, MessageRole, RenameSessionRequest, SendMessageRequest,
    SendMessageResponse,
};
pub use dashboard::{
    ChartKind, ChartTemplate, ClassifyResponse, DashboardResponse, DashboardSource,
    GenerateDashboardRequest, MetricCaption, RenderedDocument, TopicBucket,
};
