//! Built-in permission reference tables.
//!
//! Weights are 0–100, curated from platform permission documentation and
//! security research. Descriptions are deliberately blunt about what a
//! permission lets an extension do. Not every described permission carries
//! an explicit weight; those resolve through the unknown-weight fallback.

/// Risk weight per permission identifier.
pub(super) const WEIGHTS: &[(&str, u32)] = &[
    // System-level access (highest risk)
    ("nativeMessaging", 100),        // can run local software outside the sandbox
    ("debugger", 95),                // can inspect and control all page behavior
    ("webAuthenticationProxy", 90),  // can intercept security key (WebAuthn) requests
    ("proxy", 90),                   // can redirect all network traffic
    ("vpnProvider", 90),
    // Broad data access (very high risk)
    ("scripting", 85),               // arbitrary code injection into pages
    ("userScripts", 85),
    ("webRequestBlocking", 85),      // block, redirect, or modify requests
    ("webRequest", 80),              // observe all traffic (passwords, data)
    ("clipboardRead", 80),           // passwords from managers, crypto keys
    ("cookies", 75),                 // session hijacking
    ("identity.email", 75),
    ("identity", 70),                // auth tokens
    ("history", 70),
    ("pageCapture", 70),
    ("tabCapture", 70),
    ("desktopCapture", 70),
    ("<all_urls>", 70),              // access to all websites
    ("*://*/*", 70),                 // same grant, alternate spelling
    // Moderate / feature-specific
    ("fileSystemProvider", 65),
    ("sessions", 65),
    ("downloads", 60),
    ("downloads.open", 60),
    ("geolocation", 60),
    ("topSites", 55),
    ("management", 50),              // can disable/uninstall other extensions
    ("clipboardWrite", 50),
    ("bookmarks", 45),
    ("privacy", 45),
    ("contentSettings", 45),
    ("tabs", 40),                    // URLs/titles of open tabs, not content
    ("searchProvider", 40),
    ("declarativeNetRequestWithHostAccess", 40),
    ("declarativeNetRequest", 35),   // safe rule-based blocking (ad blockers)
    // Low risk / utility
    ("system.cpu", 30),
    ("system.memory", 30),
    ("system.storage", 30),
    ("readingList", 25),
    ("browsingData", 25),
    ("webNavigation", 20),
    ("storage", 15),
    ("unlimitedStorage", 15),
    ("idle", 15),
    ("notifications", 10),
    ("alarms", 5),
    ("contextMenus", 5),
    ("sidePanel", 5),
    // Temporary, user-invoked access. No standing risk.
    ("activeTab", 0),
];

/// Human-readable description per permission identifier.
pub(super) const DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "<all_urls>",
        "DANGEROUS: Allows the extension to read and change data on *all websites* you visit (e.g., bank, email, social media).",
    ),
    (
        "*://*/*",
        "DANGEROUS: Allows the extension to read and change data on *all websites* you visit (e.g., bank, email, social media).",
    ),
    (
        "nativeMessaging",
        "CRITICAL RISK: Allows the extension to communicate with and run software *on your computer*, outside the browser's sandbox.",
    ),
    (
        "debugger",
        "CRITICAL RISK: Allows the extension to take full control of web pages. It can read all data (including passwords you type), record your actions, and modify content.",
    ),
    (
        "webAuthenticationProxy",
        "CRITICAL RISK: Allows the extension to intercept your hardware security key (e.g., YubiKey) or biometric logins.",
    ),
    (
        "proxy",
        "CRITICAL RISK: Allows the extension to redirect *all of your internet traffic* through its own servers, enabling it to monitor, block, or modify everything you do online.",
    ),
    (
        "vpnProvider",
        "CRITICAL RISK: Allows the extension to act as a VPN, routing *all of your internet traffic* through its own servers.",
    ),
    (
        "scripting",
        "VERY HIGH RISK: Allows the extension to inject and run its own code on websites you visit. This can be used to steal data, modify content, or log your keystrokes.",
    ),
    (
        "userScripts",
        "VERY HIGH RISK: Allows the extension to inject and run its own code on websites you visit. This can be used to steal data, modify content, or log your keystrokes.",
    ),
    (
        "webRequestBlocking",
        "VERY HIGH RISK: Allows the extension to block, modify, or redirect your network requests. Can be used for advanced tracking, ad-blocking, or malicious redirection.",
    ),
    (
        "webRequest",
        "HIGH RISK: Allows the extension to *observe* all network traffic and data being sent and received, including passwords, form data, and personal information.",
    ),
    (
        "clipboardRead",
        "HIGH RISK: Allows the extension to read anything you copy to your clipboard (passwords from password managers, crypto keys, personal messages).",
    ),
    (
        "cookies",
        "HIGH RISK: Allows the extension to read, change, and delete your cookies. This can be used to hijack your login sessions to websites.",
    ),
    (
        "identity.email",
        "HIGH RISK: Allows the extension to request your email address associated with your browser profile.",
    ),
    (
        "identity",
        "HIGH RISK: Allows the extension to request authentication (login) tokens, potentially giving it access to your web service accounts.",
    ),
    (
        "history",
        "HIGH RISK: Allows the extension to read and search your *entire* browsing history, which can be used for profiling and tracking.",
    ),
    (
        "desktopCapture",
        "HIGH RISK: Allows the extension to capture the contents of your entire screen.",
    ),
    (
        "tabCapture",
        "HIGH RISK: Allows the extension to record audio and video from your open tabs.",
    ),
    (
        "pageCapture",
        "HIGH RISK: Allows the extension to save a complete snapshot (MHTML) of a web page, including all text.",
    ),
    (
        "activeTab",
        "SAFE: Grants the extension temporary access to the *currently active tab* when you click the extension's icon. This is a secure, user-invoked permission.",
    ),
    (
        "alarms",
        "Allows the extension to schedule tasks to run at a specific time or on a repeating interval (e.g., check for new mail every 5 minutes).",
    ),
    (
        "audio",
        "Enables the extension to capture audio from open tabs or your microphone.",
    ),
    (
        "bookmarks",
        "Allows the extension to read, change, add, and delete your bookmarks.",
    ),
    (
        "browsingData",
        "Allows the extension to clear your browsing data, such as your history, cookies, cache, and downloads.",
    ),
    (
        "captivePortal",
        "Allows the extension to detect and interact with Wi-Fi login pages (captive portals).",
    ),
    (
        "clipboardWrite",
        "Allows the extension to add content to your clipboard, replacing whatever you last copied.",
    ),
    (
        "contentSettings",
        "Allows the extension to change browser settings for specific websites, such as enabling or blocking popups, JavaScript, or cookies.",
    ),
    (
        "contextMenus",
        "Allows the extension to add new items to your right-click (context) menu.",
    ),
    (
        "declarativeContent",
        "Allows the extension to show its icon in the address bar only when it's relevant to the current page's content.",
    ),
    (
        "declarativeNetRequest",
        "A safe, privacy-preserving way for extensions (like ad blockers) to block or modify network requests based on a set of rules.",
    ),
    (
        "declarativeNetRequestFeedback",
        "Allows the extension to get information about network requests that were blocked or modified by its rules.",
    ),
    (
        "declarativeNetRequestWithHostAccess",
        "Extends 'declarativeNetRequest' to let the extension use host permissions to modify requests.",
    ),
    (
        "dns",
        "Allows the extension to resolve domain names (e.g., 'google.com' to an IP address) using a custom DNS provider.",
    ),
    (
        "documentScan",
        "Allows the extension to interact with hardware document scanners.",
    ),
    (
        "downloads",
        "Allows the extension to start, monitor, pause, and cancel your downloads.",
    ),
    (
        "downloads.open",
        "Allows the extension to open files it has downloaded, bypassing the browser's usual 'Open' prompt.",
    ),
    (
        "downloads.ui",
        "Allows the extension to show or hide the browser's downloads shelf.",
    ),
    (
        "enterprise.deviceAttributes",
        "Allows the extension to read device information in a managed (corporate) environment.",
    ),
    (
        "enterprise.hardwarePlatform",
        "Allows the extension to read hardware platform information in a managed (corporate) environment.",
    ),
    (
        "enterprise.networkingAttributes",
        "Allows the extension to read network information in a managed (corporate) environment.",
    ),
    (
        "enterprise.platformKeys",
        "Allows the extension to manage security certificates in a managed (corporate) environment.",
    ),
    (
        "favicon",
        "Allows the extension to access the small icons (favicons) of your open tabs.",
    ),
    (
        "fileBrowserHandler",
        "Allows the extension to register itself as a file handler in the operating system's file browser.",
    ),
    (
        "fileSystemProvider",
        "Allows the extension to create and manage virtual file systems that can be accessed by the operating system.",
    ),
    (
        "fontSettings",
        "Allows the extension to change your browser's font settings.",
    ),
    (
        "gcm",
        "Allows the extension to receive push messages from Google Cloud Messaging (now deprecated, replaced by 'push').",
    ),
    (
        "geolocation",
        "Allows the extension to access your precise physical location without prompting you each time.",
    ),
    (
        "idle",
        "Allows the extension to detect when your computer is idle or in use.",
    ),
    (
        "loginState",
        "Allows the extension to monitor your login status in the browser.",
    ),
    (
        "management",
        "Allows the extension to view, enable, disable, or uninstall your *other* installed extensions.",
    ),
    (
        "notifications",
        "Allows the extension to create and display desktop notifications.",
    ),
    (
        "offscreen",
        "Allows the extension to create a hidden document to run tasks in the background.",
    ),
    (
        "platformKeys",
        "Allows the extension to access and manage hardware-backed security keys (like a YubiKey).",
    ),
    (
        "power",
        "Allows the extension to monitor the system's power state (e.g., prevent the system from sleeping).",
    ),
    (
        "printerProvider",
        "Allows the extension to provide its own virtual printers to the browser.",
    ),
    ("printing", "Allows the extension to initiate a print job."),
    (
        "printingMetrics",
        "Allows the extension to track information about print jobs.",
    ),
    (
        "privacy",
        "Allows the extension to read and change your browser's privacy settings (e.g., 'Safe Browsing' or 'Tracking Protection').",
    ),
    (
        "processes",
        "Allows the extension to query information about the browser's running processes.",
    ),
    (
        "readingList",
        "Allows the extension to read, add, and remove items from your Reading List.",
    ),
    (
        "runtime",
        "Provides basic extension functions, but 'runtime' itself is not a high-risk permission (though it enables 'nativeMessaging').",
    ),
    (
        "search",
        "Allows the extension to integrate with the browser's search provider settings.",
    ),
    (
        "searchProvider",
        "Allows the extension to read, change, or override your default search engine settings.",
    ),
    (
        "sessions",
        "Allows the extension to read and restore your open tabs and windows from your browsing session.",
    ),
    (
        "sidePanel",
        "Allows the extension to show content in the browser's side panel.",
    ),
    (
        "storage",
        "Allows the extension to store data locally or sync it across your devices. This is a standard permission.",
    ),
    (
        "system.cpu",
        "Allows the extension to read information about your computer's CPU.",
    ),
    (
        "system.display",
        "Allows the extension to read information about your computer's display(s).",
    ),
    (
        "system.memory",
        "Allows the extension to read information about your computer's system memory (RAM).",
    ),
    (
        "system.storage",
        "Allows the extension to get information about your computer's storage devices.",
    ),
    (
        "tabGroups",
        "Allows the extension to organize your tabs into groups (read, create, and modify groups).",
    ),
    (
        "tabs",
        "Allows the extension to see the URLs, titles, and icons of all your open tabs. Does *not* let it read the *content* of those tabs.",
    ),
    (
        "topSites",
        "Allows the extension to read the list of your most frequently visited websites (shown on the 'New Tab' page).",
    ),
    (
        "tts",
        "Allows the extension to use the browser's text-to-speech (TTS) engine.",
    ),
    (
        "ttsEngine",
        "Allows the extension to register itself *as* a text-to-speech engine, processing any text it is given to speak.",
    ),
    (
        "unlimitedStorage",
        "Allows the extension to bypass the standard 5MB limit for storing data locally.",
    ),
    (
        "wallpaper",
        "Allows the extension to change your browser or device wallpaper (ChromeOS-specific).",
    ),
    (
        "webNavigation",
        "Allows the extension to observe the status of web page navigation (e.g., when a page starts or finishes loading).",
    ),
    (
        "accessibilityFeatures.read",
        "Allows the extension to read the state of your browser's accessibility features (e.g., if screen reader is on).",
    ),
    (
        "accessibilityFeatures.modify",
        "Allows the extension to change the state of your browser's accessibility features.",
    ),
    (
        "certificateProvider",
        "Allows the extension to provide security certificates for authentication.",
    ),
    (
        "devtools",
        "Allows the extension to add new panels and features to the browser's developer tools.",
    ),
    (
        "mdns",
        "Allows the extension to discover services on your local network (LAN).",
    ),
];
