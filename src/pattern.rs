use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// 要删除的片段：`'id' => <数字>, `
///
/// 只认规范写法（单引号、箭头两侧各一个空格、逗号后恰好一个空格），
/// 其他写法原样保留。`\d` 为 Unicode 数字类，全角等十进制数字同样匹配。
pub const ID_PATTERN: &str = r"'id' => \d+, ";

static ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(ID_PATTERN).unwrap());

/// 替换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped<'a> {
    /// 替换后的文本；没有匹配时借用原文本
    pub text: Cow<'a, str>,
    /// 删除的片段数
    pub removed: usize,
}

impl Stripped<'_> {
    /// 是否有改动
    pub fn changed(&self) -> bool {
        self.removed > 0
    }
}

/// 删除文本中所有 `'id' => N, ` 片段
pub fn strip_ids(text: &str) -> Stripped<'_> {
    let removed = count_ids(text);
    if removed == 0 {
        return Stripped { text: Cow::Borrowed(text), removed };
    }

    Stripped {
        text: ID_REGEX.replace_all(text, ""),
        removed,
    }
}

/// 统计匹配数量
pub fn count_ids(text: &str) -> usize {
    ID_REGEX.find_iter(text).count()
}
