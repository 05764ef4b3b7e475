pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";

pub mod huggingface {
    pub const API_BASE: &str = "https://router.huggingface.co/v1";
    pub const API_KEY_ENV_VAR: &str = "HF_TOKEN";
}

pub mod openai {
    pub const API_BASE: &str = "https://api.openai.com/v1";
    pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
}

pub mod openrouter {
    pub const API_BASE: &str = "https://openrouter.ai/api/v1";
    pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";
}

pub mod custom {
    pub const API_KEY_ENV_VAR: &str = "QUICKCHAT_API_KEY";
}
