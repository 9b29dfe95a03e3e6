//! Built-in patch plans for the Telegram mini-app script.
//!
//! Both plans make the same change to `public/js/tma-v2.js`: restore Arabic
//! UI strings that were saved with a broken encoding and harden
//! `initTelegram()` against missing WebApp features.
//!
//! - `tma-v2-lines` addresses lines by position. It only fits the exact file
//!   revision it was written against, and running it twice corrupts the file.
//! - `tma-v2-anchors` locates every change by its surrounding text, so it
//!   survives unrelated line shifts and is a no-op on an already-fixed file.

use crate::domain::{Edit, PatchPlan};
use crate::error::PatchError;

/// Default target of the built-in plans.
pub const TMA_SCRIPT: &str = "public/js/tma-v2.js";

/// Positional replacements, indexed against the unpatched file.
const LINE_FIXES: &[(usize, &str)] = &[
    (149, "            renderError(\"تعذر تحميل المباريات حاليا\");"),
    (151, "        showNote(\"فشل التحديث. سيتم المحاولة تلقائيا.\");"),
    (166, "        leagueName: safeString(raw.league && raw.league.name, \"بطولة\"),"),
    (168, "        homeName: safeString(raw.home && raw.home.name, \"الفريق الأول\"),"),
    (170, "        awayName: safeString(raw.away && raw.away.name, \"الفريق الثاني\"),"),
    (195, "            channel: safeString(s && s.channel, \"بث مباشر\"),"),
    (223, "        renderError(\"لا توجد مباريات متاحة الآن\");"),
    (238, "    if (live.length) els.matches.appendChild(createGroup(\"مباشر الآن\", live));"),
    (239, "    if (next.length) els.matches.appendChild(createGroup(\"مباريات قادمة\", next));"),
    (240, "    if (done.length) els.matches.appendChild(createGroup(\"مباريات منتهية\", done));"),
    (278, "    bottom.appendChild(createEl(\"span\", \"servers-count\", `📺 ${match.streams.length} سيرفر`));"),
    (279, "    bottom.appendChild(createEl(\"button\", \"watch-pill\", \"اختيار السيرفر\"));"),
    (288, "    if (match.status === \"LIVE\") return createEl(\"span\", \"status live\", \"مباشر\");"),
    (289, "    if (match.status === \"FT\") return createEl(\"span\", \"status ft\", \"انتهت\");"),
    (307, "        center.appendChild(createEl(\"div\", \"sub\", match.status === \"LIVE\" ? \"جارية الآن\" : \"بتوقيت GMT\"));"),
    (336, "    els.serversTitle.textContent = `${state.selectedMatch.homeName} × ${state.selectedMatch.awayName}`;"),
    (346, "                \"اعد المحاولة لاحقا، السيرفر غير متوفر حاليا. قد يظهر بعد التحديث التالي خلال 7 دقائق.\","),
    (355, "            const icon = createEl(\"span\", \"server-icon\", \"📺\");"),
    (357, "            text.appendChild(createEl(\"b\", \"\", `سيرفر ${idx + 1}`));"),
    (377, "        showNote(\"رابط البث غير صالح.\");"),
    (380, "        showNote(\"اعد المحاولة لاحقا، السيرفر غير متوفر حاليا.\");"),
    (414, "            el.textContent = `⏳ ${String(h).padStart(2, \"0\")}:${String(m).padStart(2, \"0\")}:${String(s).padStart(2, \"0\")}`;"),
    (469, "        tg.showConfirm(\"هل تريد الخروج من التطبيق؟\", (ok) => {"),
    (475, "    const ok = window.confirm(\"هل تريد الخروج من التطبيق؟\");"),
    (590, "    showNote(\"تم تفعيل وضع مشاهدة أفقي بديل.\");"),
];

/// Lines `59..74` of the unpatched file hold the original `initTelegram()`.
const INIT_TELEGRAM_RANGE: (usize, usize) = (59, 74);

/// `initTelegram()` as shipped before the fix.
const INIT_TELEGRAM_OLD: &[&str] = &[
    "function initTelegram() {",
    "    if (!tg) return;",
    "",
    "    tg.ready();",
    "    tg.expand();",
    "    if (typeof tg.disableVerticalSwipes === \"function\") {",
    "        tg.disableVerticalSwipes();",
    "    }",
    "    tg.BackButton.onClick(handleBack);",
    "",
    "    if (tg.colorScheme === \"dark\" || tg.colorScheme === \"light\") {",
    "        document.documentElement.setAttribute(\"data-theme\", tg.colorScheme);",
    "    }",
    "}",
];

/// `initTelegram()` wrapped in a try block with feature checks.
const INIT_TELEGRAM_NEW: &[&str] = &[
    "function initTelegram() {",
    "    if (!tg) return;",
    "",
    "    try {",
    "        tg.ready();",
    "        tg.expand();",
    "        if (typeof tg.disableVerticalSwipes === \"function\") {",
    "            tg.disableVerticalSwipes();",
    "        }",
    "        if (tg.BackButton && typeof tg.BackButton.onClick === \"function\") {",
    "            tg.BackButton.onClick(handleBack);",
    "        }",
    "",
    "        if (tg.colorScheme === \"dark\" || tg.colorScheme === \"light\") {",
    "            document.documentElement.setAttribute(\"data-theme\", tg.colorScheme);",
    "        }",
    "    } catch (e) {",
    "        console.error(\"Telegram initialization error:\", e);",
    "    }",
    "}",
];

/// Mis-decoded UTF-8 (read as Windows-1252) paired with the intended text.
const MOJIBAKE_FIXES: &[(&str, &str)] = &[
    (
        "renderError(\"ØªØ¹Ø°Ø± ØªØ\u{ad}Ù…ÙŠÙ„ Ø§Ù„Ù…Ø¨Ø§Ø±ÙŠØ§Øª Ø\u{ad}Ø§Ù„ÙŠØ§\")",
        "renderError(\"تعذر تحميل المباريات حاليا\")",
    ),
    (
        "showNote(\"Ù Ø´Ù„ Ø§Ù„ØªØ\u{ad}Ø¯ÙŠØ«. Ø³ÙŠØªÙ… Ø§Ù„Ù…Ø\u{ad}Ø§ÙˆÙ„Ø© ØªÙ„Ù‚Ø§Ø¦ÙŠØ§.\")",
        "showNote(\"فشل التحديث. سيتم المحاولة تلقائيا.\")",
    ),
    (
        "safeString(raw.league && raw.league.name, \"Ø¨Ø·ÙˆÙ„Ø©\")",
        "safeString(raw.league && raw.league.name, \"بطولة\")",
    ),
    (
        "safeString(raw.home && raw.home.name, \"Ø§Ù„Ù Ø±ÙŠÙ‚ Ø§Ù„Ø£ÙˆÙ„\")",
        "safeString(raw.home && raw.home.name, \"الفريق الأول\")",
    ),
    (
        "safeString(raw.away && raw.away.name, \"Ø§Ù„Ù Ø±ÙŠÙ‚ Ø§Ù„Ø«Ø§Ù†ÙŠ\")",
        "safeString(raw.away && raw.away.name, \"الفريق الثاني\")",
    ),
    (
        "safeString(s && s.channel, \"Ø¨Ø« Ù…Ø¨Ø§Ø´Ø±\")",
        "safeString(s && s.channel, \"بث مباشر\")",
    ),
    (
        "renderError(\"Ù„Ø§ ØªÙˆØ¬Ø¯ Ù…Ø¨Ø§Ø±ÙŠØ§Øª Ù…ØªØ§Ø\u{ad}Ø© Ø§Ù„Ø¢Ù†\")",
        "renderError(\"لا توجد مباريات متاحة الآن\")",
    ),
    (
        "createGroup(\"Ù…Ø¨Ø§Ø´Ø± Ø§Ù„Ø¢Ù†\", live)",
        "createGroup(\"مباشر الآن\", live)",
    ),
    (
        "createGroup(\"Ù…Ø¨Ø§Ø±ÙŠØ§Øª Ù‚Ø§Ø¯Ù…Ø©\", next)",
        "createGroup(\"مباريات قادمة\", next)",
    ),
    (
        "createGroup(\"Ù…Ø¨Ø§Ø±ÙŠØ§Øª Ù…Ù†ØªÙ‡ÙŠØ©\", done)",
        "createGroup(\"مباريات منتهية\", done)",
    ),
    (
        "`ðŸ“º ${match.streams.length} Ø³ÙŠØ±Ù Ø±`",
        "`📺 ${match.streams.length} سيرفر`",
    ),
    (
        "createEl(\"button\", \"watch-pill\", \"Ø§Ø®ØªÙŠØ§Ø± Ø§Ù„Ø³ÙŠØ±Ù Ø±\")",
        "createEl(\"button\", \"watch-pill\", \"اختيار السيرفر\")",
    ),
    (
        "createEl(\"span\", \"status live\", \"Ù…Ø¨Ø§Ø´Ø±\")",
        "createEl(\"span\", \"status live\", \"مباشر\")",
    ),
    (
        "createEl(\"span\", \"status ft\", \"Ø§Ù†ØªÙ‡Øª\")",
        "createEl(\"span\", \"status ft\", \"انتهت\")",
    ),
    (
        "match.status === \"LIVE\" ? \"Ø¬Ø§Ø±ÙŠØ© Ø§Ù„Ø¢Ù†\" : \"Ø¨ØªÙˆÙ‚ÙŠØª GMT\"",
        "match.status === \"LIVE\" ? \"جارية الآن\" : \"بتوقيت GMT\"",
    ),
    (
        "`${state.selectedMatch.homeName} Ã— ${state.selectedMatch.awayName}`",
        "`${state.selectedMatch.homeName} × ${state.selectedMatch.awayName}`",
    ),
    (
        "\"Ø§Ø¹Ø¯ Ø§Ù„Ù…Ø\u{ad}Ø§ÙˆÙ„Ø© Ù„Ø§Ø\u{ad}Ù‚Ø§ØŒ Ø§Ù„Ø³ÙŠØ±Ù Ø± ØºÙŠØ± Ù…ØªÙˆÙ Ø± Ø\u{ad}Ø§Ù„ÙŠØ§. Ù‚Ø¯ ÙŠØ¸Ù‡Ø± Ø¨Ø¹Ø¯ Ø§Ù„ØªØ\u{ad}Ø¯ÙŠØ« Ø§Ù„ØªØ§Ù„ÙŠ Ø®Ù„Ø§Ù„ 7 Ø¯Ù‚Ø§Ø¦Ù‚.\"",
        "\"اعد المحاولة لاحقا، السيرفر غير متوفر حاليا. قد يظهر بعد التحديث التالي خلال 7 دقائق.\"",
    ),
    (
        "createEl(\"span\", \"server-icon\", \"ðŸ“º\")",
        "createEl(\"span\", \"server-icon\", \"📺\")",
    ),
    (
        "`Ø³ÙŠØ±Ù Ø± ${idx + 1}`",
        "`سيرفر ${idx + 1}`",
    ),
    (
        "showNote(\"Ø±Ø§Ø¨Ø· Ø§Ù„Ø¨Ø« ØºÙŠØ± ØµØ§Ù„Ø\u{ad}.\")",
        "showNote(\"رابط البث غير صالح.\")",
    ),
    (
        "showNote(\"Ø§Ø¹Ø¯ Ø§Ù„Ù…Ø\u{ad}Ø§ÙˆÙ„Ø© Ù„Ø§Ø\u{ad}Ù‚Ø§ØŒ Ø§Ù„Ø³ÙŠØ±Ù Ø± ØºÙŠØ± Ù…ØªÙˆÙ Ø± Ø\u{ad}Ø§Ù„ÙŠØ§.\")",
        "showNote(\"اعد المحاولة لاحقا، السيرفر غير متوفر حاليا.\")",
    ),
    (
        "`â ± ",
        "`⏳ ",
    ),
    (
        "tg.showConfirm(\"Ù‡Ù„ ØªØ±ÙŠØ¯ Ø§Ù„Ø®Ø±ÙˆØ¬ Ù…Ù† Ø§Ù„ØªØ·Ø¨ÙŠÙ‚ØŸ\"",
        "tg.showConfirm(\"هل تريد الخروج من التطبيق؟\"",
    ),
    (
        "window.confirm(\"Ù‡Ù„ ØªØ±ÙŠØ¯ Ø§Ù„Ø®Ø±ÙˆØ¬ Ù…Ù† Ø§Ù„ØªØ·Ø¨ÙŠÙ‚ØŸ\")",
        "window.confirm(\"هل تريد الخروج من التطبيق؟\")",
    ),
    (
        "showNote(\"ØªÙ… ØªÙ Ø¹ÙŠÙ„ ÙˆØ¶Ø¹ Ù…Ø´Ø§Ù‡Ø¯Ø© Ø£Ù Ù‚ÙŠ Ø¨Ø¯ÙŠÙ„.\")",
        "showNote(\"تم تفعيل وضع مشاهدة أفقي بديل.\")",
    ),
];

/// Summary line for each built-in plan.
pub const BUILTIN_PLANS: &[(&str, &str)] = &[
    (
        "tma-v2-anchors",
        "Fix mis-encoded Arabic strings and harden initTelegram() by text anchors",
    ),
    (
        "tma-v2-lines",
        "Same fix by fixed line positions (single-use; not safe to re-run)",
    ),
];

/// Look up a built-in plan by name.
pub fn builtin(name: &str) -> Result<PatchPlan, PatchError> {
    match name {
        "tma-v2-anchors" => Ok(tma_v2_anchors()),
        "tma-v2-lines" => Ok(tma_v2_lines()),
        other => Err(PatchError::UnknownPlan(other.to_string())),
    }
}

/// Positional plan: line assignments followed by one slice replacement.
///
/// The assignments run first and address the pre-splice shape; the splice
/// grows the file by five lines.
pub fn tma_v2_lines() -> PatchPlan {
    let (start, end) = INIT_TELEGRAM_RANGE;
    PatchPlan::new("tma-v2-lines", TMA_SCRIPT)
        .with_description(describe("tma-v2-lines"))
        .with_edits(
            LINE_FIXES
                .iter()
                .map(|&(index, content)| Edit::line(index, content)),
        )
        .with_edit(Edit::splice(start, end, INIT_TELEGRAM_NEW.iter().copied()))
}

/// Content-addressed plan: every change is located by its own text.
pub fn tma_v2_anchors() -> PatchPlan {
    PatchPlan::new("tma-v2-anchors", TMA_SCRIPT)
        .with_description(describe("tma-v2-anchors"))
        .with_edits(MOJIBAKE_FIXES.iter().map(|&(find, replace)| Edit::Anchor {
            find: find.to_string(),
            replace: replace.to_string(),
            all: true,
        }))
        .with_edit(Edit::anchor(
            INIT_TELEGRAM_OLD.join("\n"),
            INIT_TELEGRAM_NEW.join("\n"),
        ))
}

fn describe(name: &str) -> String {
    BUILTIN_PLANS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| (*d).to_string())
        .unwrap_or_default()
}
