use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(about = "Ordered to-do list REST service")]
pub struct Config {
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "TODO_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path the todo routes are mounted under. Empty mounts them at the root.
    #[arg(long, env = "TODO_API_PREFIX", default_value = "/api")]
    pub api_prefix: String,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
