/// Supported UI language tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ua,
}

impl Language {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Language::En),
            "ua" => Some(Language::Ua),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ua => "ua",
        }
    }
}

/// Key-based string lookup for the active language.
///
/// Unmapped keys come back verbatim, so a missing translation degrades to
/// showing the key instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.language {
            Language::En => EN,
            Language::Ua => UA,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

const EN: &[(&str, &str)] = &[
    // Auth
    ("welcomeBack", "Welcome Back!"),
    ("createAccount", "Create Your Account"),
    ("emailPlaceholder", "Email Address"),
    ("passwordPlaceholder", "Password"),
    ("login", "Login"),
    ("register", "Register"),
    ("noAccount", "Don't have an account?"),
    ("haveAccount", "Already have an account?"),
    ("registerHere", "Register here"),
    ("loginHere", "Login here"),
    ("processing", "Processing..."),
    ("loginFailed", "Login failed. Please check your credentials."),
    ("genericError", "An error occurred. Please try again later."),
    ("registrationSuccess", "Registration successful! You can now log in."),
    ("registrationFailed", "Registration failed."),
    // Dashboard
    ("dashboardTitle", "Blood Pressure Dashboard"),
    ("logout", "Logout"),
    ("fetchReadingsFailed", "Failed to fetch readings."),
    ("fetchError", "An error occurred while fetching data."),
    ("addNewReading", "Add New Reading"),
    ("systolicPlaceholder", "Systolic (e.g., 120)"),
    ("diastolicPlaceholder", "Diastolic (e.g., 80)"),
    ("addReading", "Add Reading"),
    ("adding", "Adding..."),
    ("addReadingFailed", "Failed to add reading."),
    ("historyChart", "History Chart"),
    ("noReadings", "No readings recorded yet. Add one to get started!"),
    ("recordedReadings", "Recorded Readings"),
    ("date", "Date"),
    ("systolic", "Systolic"),
    ("diastolic", "Diastolic"),
    ("delete", "Delete"),
    ("deleteFailed", "Failed to delete reading."),
    ("deleteError", "An error occurred while deleting."),
    ("deleteSuccess", "Reading successfully deleted."),
    ("deleteConfirmTitle", "Are you sure you want to delete this reading?"),
    ("confirm", "Confirm"),
    ("cancel", "Cancel"),
];

const UA: &[(&str, &str)] = &[
    // Auth
    ("welcomeBack", "Ласкаво просимо!"),
    ("createAccount", "Створити обліковий запис"),
    ("emailPlaceholder", "Електронна адреса"),
    ("passwordPlaceholder", "Пароль"),
    ("login", "Увійти"),
    ("register", "Зареєструватися"),
    ("noAccount", "Немає облікового запису?"),
    ("haveAccount", "Вже є обліковий запис?"),
    ("registerHere", "Зареєструйтесь тут"),
    ("loginHere", "Увійдіть тут"),
    ("processing", "Обробка..."),
    ("loginFailed", "Помилка входу. Перевірте свої дані."),
    ("genericError", "Сталася помилка. Спробуйте ще раз пізніше."),
    ("registrationSuccess", "Реєстрація успішна! Тепер ви можете увійти."),
    ("registrationFailed", "Помилка реєстрації."),
    // Dashboard
    ("dashboardTitle", "Панель артеріального тиску"),
    ("logout", "Вийти"),
    ("fetchReadingsFailed", "Не вдалося завантажити записи."),
    ("fetchError", "Сталася помилка під час завантаження даних."),
    ("addNewReading", "Додати новий запис"),
    ("systolicPlaceholder", "Систолічний (напр., 120)"),
    ("diastolicPlaceholder", "Діастолічний (напр., 80)"),
    ("addReading", "Додати запис"),
    ("adding", "Додавання..."),
    ("addReadingFailed", "Не вдалося додати запис."),
    ("historyChart", "Графік історії"),
    ("noReadings", "Ще немає записів. Додайте перший, щоб почати!"),
    ("recordedReadings", "Збережені записи"),
    ("date", "Дата"),
    ("systolic", "Систолічний"),
    ("diastolic", "Діастолічний"),
    ("delete", "Видалити"),
    ("deleteFailed", "Не вдалося видалити запис."),
    ("deleteError", "Сталася помилка під час видалення."),
    ("deleteSuccess", "Запис успішно видалено."),
    ("deleteConfirmTitle", "Ви впевнені, що хочете видалити цей запис?"),
    ("confirm", "Підтвердити"),
    ("cancel", "Скасувати"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english() {
        let t = Translator::default();
        assert_eq!(t.language(), Language::En);
        assert_eq!(t.translate("login"), "Login");
    }

    #[test]
    fn switching_language_switches_the_table() {
        let mut t = Translator::new(Language::En);
        t.set_language(Language::Ua);
        assert_eq!(t.translate("login"), "Увійти");
    }

    #[test]
    fn unmapped_key_falls_back_to_the_key_itself() {
        let t = Translator::new(Language::En);
        assert_eq!(t.translate("someUnknownKey"), "someUnknownKey");
    }

    #[test]
    fn both_tables_cover_the_same_keys() {
        for (key, _) in EN {
            assert!(
                UA.iter().any(|(k, _)| k == key),
                "missing ua translation for {key}"
            );
        }
        assert_eq!(EN.len(), UA.len());
    }

    #[test]
    fn language_tags_round_trip() {
        assert_eq!(Language::from_tag("en"), Some(Language::En));
        assert_eq!(Language::from_tag("ua"), Some(Language::Ua));
        assert_eq!(Language::from_tag("de"), None);
        assert_eq!(Language::En.tag(), "en");
    }
}
