pub mod io;
pub mod pattern;
pub mod stripper;
pub mod utils;

// 重新导出主要结构
pub use pattern::{count_ids, strip_ids, Stripped, ID_PATTERN};
pub use stripper::{strip_file, PatternStripper, StripReport};
pub use utils::StripError;

// 常量定义
/// 未指定 `--input` 时处理的文件
pub const DEFAULT_TARGET: &str = "database/seeders/StatesAndLgasSeeder.php";

/// 成功后输出的确认信息
pub const SUCCESS_MESSAGE: &str = "IDs removed successfully!";
