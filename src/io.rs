/// IO 抽象层模块
///
/// 文件读写以 trait 形式暴露，剥离器只依赖接口，测试时可以换成内存实现。
///
/// # 架构设计
///
/// - **traits**: 定义 TextReader/TextWriter trait 接口
/// - **text_io**: 基于 std::fs 的默认实现
///
/// # 使用示例
///
/// ```rust,ignore
/// use id_stripper::io::{FsTextReader, TextReader};
///
/// let reader = FsTextReader;
/// let text = reader.read_text(Path::new("StatesAndLgasSeeder.php"))?;
/// ```
pub mod traits;
pub mod text_io;

// === 导出 trait 定义 ===
pub use traits::{TextReader, TextWriter};

// === 导出默认实现 ===
pub use text_io::{FsTextReader, FsTextWriter};
