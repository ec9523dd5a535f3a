pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 bg-gray-50 dark:bg-gray-900";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";

// Fortune wheel
pub const WHEEL_CARD: &str = "bg-white dark:bg-gray-800 p-4 sm:p-6 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] max-w-5xl mx-auto border border-gray-100 dark:border-gray-700";
pub const PRIZE_TILE: &str = "bg-white dark:bg-gray-800 p-3 rounded-lg shadow-sm flex items-center border-l-4 border-violet-500";
pub const RESULT_BANNER: &str = "flex items-center justify-center px-6 py-4 rounded-xl bg-gradient-to-r from-violet-400 to-violet-600 border-2 border-violet-300 text-white font-bold text-xl shadow-lg animate-pulse";

// Canvas colours that are not part of the wheel config
pub const POINTER_OUTLINE: &str = "#e69500";
