/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 分析服务地址
    pub analysis_endpoint: String,
    /// 随请求发送的任务描述
    pub analysis_task: String,
    /// 题目文件（TOML），为空时使用内置示例
    pub questions_file: Option<String>,
    /// 报告输出文件（Markdown），为空时不写文件
    pub report_output_file: Option<String>,
    /// 是否进入交互式编辑模式
    pub interactive: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_endpoint: "http://localhost:5000/api/analyze_exam".to_string(),
            analysis_task: "Analyze UPSC Prelims performance based on the provided answers."
                .to_string(),
            questions_file: None,
            report_output_file: None,
            interactive: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源读取配置，缺失或无法解析的项使用默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            analysis_endpoint: non_empty("ANALYSIS_ENDPOINT").unwrap_or(default.analysis_endpoint),
            analysis_task: non_empty("ANALYSIS_TASK").unwrap_or(default.analysis_task),
            questions_file: non_empty("QUESTIONS_FILE").or(default.questions_file),
            report_output_file: non_empty("REPORT_OUTPUT_FILE").or(default.report_output_file),
            interactive: lookup("INTERACTIVE").and_then(|v| v.parse().ok()).unwrap_or(default.interactive),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
