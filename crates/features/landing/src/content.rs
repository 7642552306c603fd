//! Display text and style classes of the landing view.

pub const BRAND: &str = "Login Components";
pub const HEADING: &str = "Welcome to Login Components";
pub const DESCRIPTION: &str =
    "A modern authentication system built with React, TypeScript, and Spring Boot";

pub const PRIMARY_LABEL: &str = "Get Started";
pub const SECONDARY_LABEL: &str = "Learn More";

/// Utility classes are Tailwind; the stylesheet is pulled from the CDN.
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub(crate) mod class {
    pub(crate) const PAGE: &str = "min-h-screen bg-gray-50";
    pub(crate) const NAV: &str = "bg-white shadow";
    pub(crate) const NAV_INNER: &str = "max-w-7xl mx-auto px-4 py-4 flex items-center";
    pub(crate) const BRAND: &str = "text-xl font-semibold text-gray-800";
    pub(crate) const MAIN: &str = "max-w-7xl mx-auto py-6 sm:px-6 lg:px-8";
    pub(crate) const WRAPPER: &str = "px-4 py-6 sm:px-0";
    pub(crate) const PANEL: &str =
        "border-4 border-dashed border-gray-200 rounded-lg h-96 flex items-center justify-center";
    pub(crate) const HERO: &str = "text-center";
    pub(crate) const HEADING: &str = "text-4xl font-bold text-gray-900 mb-4";
    pub(crate) const DESCRIPTION: &str = "text-lg text-gray-600 mb-8";
    pub(crate) const ACTIONS: &str = "space-x-4";
    pub(crate) const BUTTON: &str = "px-6 py-3 rounded-lg font-medium transition-colors duration-200";
    pub(crate) const PRIMARY: &str = "bg-blue-600 hover:bg-blue-700 text-white";
    pub(crate) const SECONDARY: &str = "bg-gray-200 hover:bg-gray-300 text-gray-800";
}
