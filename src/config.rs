/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// Canvas API 基础地址
    pub canvas_base_url: String,
    /// TOML 提交文件存放目录
    pub submissions_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_base_url: "https://canvas.instructure.com/api/v1".to_string(),
            submissions_folder: "submissions".to_string(),
            verbose_logging: false,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            canvas_base_url: std::env::var("CANVAS_BASE_URL").unwrap_or(default.canvas_base_url),
            submissions_folder: std::env::var("SUBMISSIONS_FOLDER").unwrap_or(default.submissions_folder),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
        }
    }
}
