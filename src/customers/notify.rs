pub const TITLE_ERROR: &str = "خطأ";
pub const TITLE_SUCCESS: &str = "تم بنجاح";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A transient user notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: TITLE_SUCCESS.to_string(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: TITLE_ERROR.to_string(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn fetch_failed(error: &impl std::fmt::Display) -> Self {
        Self::error(format!("فشل في تحميل بيانات العملاء: {}", error))
    }

    pub fn delete_failed(error: &impl std::fmt::Display) -> Self {
        Self::error(format!("فشل في حذف العميل: {}", error))
    }

    pub fn deleted() -> Self {
        Self::success("تم حذف العميل بنجاح")
    }
}

/// Surface that shows toasts to the user
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

