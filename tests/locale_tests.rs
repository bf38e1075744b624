use chrono::{DateTime, Utc};
use time_format::{Formatter, parse_accept_language};

fn ref_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1136239445, 456841962).unwrap()
}

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

#[test]
fn japanese_eras() {
    let f = Formatter::from_tag("ja");

    let cases = [
        ("%Ec", "平成18年01月02日 22時04分05秒", ref_time()),
        ("%Ex", "平成18年01月02日", ref_time()),
        ("%Ex", "昭和64年01月07日", at(600134400)),
        ("%Ex", "平成元年01月08日", at(600220800)),
        ("%Ex", "昭和20年01月01日", at(-788918400)),
        ("%Ex", "明治34年01月01日", at(-2177452800)),
        ("%Ex", "西暦1801年01月01日", at(-5333126400)),
        ("%Ex", "明治7年01月01日", at(-3029443200)),
        ("%Ex", "大正4年01月01日", at(-1735689600)),
        ("%Ex", "令和元年10月17日", at(1571307445)),
    ];

    for (pattern, expected, t) in cases {
        assert_eq!(f.format(pattern, &t), expected, "matching for {pattern}");
    }
}

#[test]
fn japanese_numerals() {
    let t = ref_time();
    let f = Formatter::from_tag("ja");

    assert_eq!(f.format("%Oy", &t), "六");
    assert_eq!(f.format("%OH", &t), "二十二");
    assert_eq!(f.format("%OI", &t), "十");
    assert_eq!(
        f.format("%Od %Om %OH:%OM:%OS %OV %OW %Ow", &t),
        "二 一 二十二:四:五 一 一 一"
    );
}

#[test]
fn french() {
    let t = ref_time();
    let f = Formatter::from_tag("fr");

    // French has no am/pm markers.
    assert_eq!(f.format("%p %P", &t), " ");
    assert_eq!(f.format("%A %d %B %Y", &t), "lundi 02 janvier 2006");
    assert_eq!(f.format("%a %d %b %Y", &t), "lun. 02 janv. 2006");
    assert_eq!(f.format("%x", &t), "02/01/2006");
}

#[test]
fn german() {
    let t = ref_time();
    let f = Formatter::from_tag("de");

    assert_eq!(f.format("%A", &t), "Montag");
    assert_eq!(f.format("%a", &t), "Mo");
    assert_eq!(f.format("%B", &t), "Januar");
    assert_eq!(f.format("%b", &t), "Jan");
    assert_eq!(f.format("%x", &t), "02.01.2006");
}

#[test]
fn russian() {
    let t = ref_time();
    let f = Formatter::from_tag("ru");

    assert_eq!(f.format("%A", &t), "Понедельник");
    assert_eq!(f.format("%a", &t), "Пн");
    assert_eq!(f.format("%B", &t), "Январь");
    assert_eq!(f.format("%b", &t), "янв");
    assert_eq!(f.format("%x", &t), "02.01.2006");
    assert_eq!(f.format("%c", &t), "Пн 02 янв 2006 22:04:05");
}

#[test]
fn simplified_chinese() {
    let t = ref_time();
    let f = Formatter::from_tag("zh-Hans");

    assert_eq!(f.format("%A", &t), "星期一");
    assert_eq!(f.format("%a", &t), "一");
    assert_eq!(f.format("%B", &t), "一月");
    assert_eq!(f.format("%b", &t), "1月");
    assert_eq!(f.format("%Y年%m月%d日", &t), "2006年01月02日");
    assert_eq!(f.format("%H时%M分%S秒", &t), "22时04分05秒");
    assert_eq!(f.format("%p", &t), "下午");
}

#[test]
fn traditional_chinese() {
    let t = ref_time();
    let f = Formatter::from_tag("zh-Hant");

    assert_eq!(f.format("%A", &t), "星期一");
    assert_eq!(f.format("%a", &t), "一");
    assert_eq!(f.format("%B", &t), "一月");
    assert_eq!(f.format("%b", &t), "1月");
    assert_eq!(f.format("%Y年%m月%d日", &t), "2006年01月02日");
    assert_eq!(f.format("%H時%M分%S秒", &t), "22時04分05秒");
    assert_eq!(f.format("%p", &t), "下午");
}

#[test]
fn accept_language_negotiation() {
    let t = ref_time();

    let cases = [
        ("nn;q=0.3, en-us;q=0.8, en,", "Mon Jan  2 22:04:05 2006"),
        ("gsw, en;q=0.7, en-US;q=0.8", "Mon Jan  2 22:04:05 2006"),
        ("gsw, nl, da", "ma 02 jan 2006 22:04:05 UTC"),
        ("fr", "lun. 02 janv. 2006 22:04:05 UTC"),
        ("invalid", "Mon Jan  2 22:04:05 2006"),
    ];

    for (header, expected) in cases {
        let f = Formatter::from_accept_language(header);
        assert_eq!(f.format("%c", &t), expected, "language detect for {header}");
    }
}

#[test]
fn quality_value_precedence() {
    let t = ref_time();

    let tags = parse_accept_language("fr;q=0.8, en;q=0.7");
    let f = Formatter::new(&tags);
    assert_eq!(f.format("%B", &t), "janvier");
    assert_eq!(f.format("%A", &t), "lundi");

    let tags = parse_accept_language("es;q=0.5, it;q=0.9");
    let f = Formatter::new(&tags);
    assert_eq!(f.format("%B", &t), "gennaio");
    assert_eq!(f.format("%A", &t), "lunedì");
}

#[test]
fn unknown_tag_falls_back_to_english() {
    let t = ref_time();
    let f = Formatter::from_tag("xx-XX");
    assert_eq!(f.format("%c", &t), "Mon Jan  2 22:04:05 2006");
}

#[test]
fn region_variant_selection() {
    let t = ref_time();

    // en-US carries a four-digit year in %x, plain en does not.
    assert_eq!(Formatter::from_tag("en-US").format("%x", &t), "01/02/2006");
    assert_eq!(Formatter::from_tag("en").format("%x", &t), "01/02/06");

    // en-GB stores lowercase am/pm markers; %p still upper-cases them
    // and %P is where the stored case shows through.
    assert_eq!(Formatter::from_tag("en-GB").format("%p", &t), "PM");
    assert_eq!(Formatter::from_tag("en-GB").format("%P", &t), "pm");
    assert_eq!(Formatter::from_tag("en").format("%P", &t), "pm");
}

#[test]
fn era_modifier_in_non_era_locale() {
    let t = ref_time();
    let f = Formatter::from_tag("de");

    // No era data, so %Ex falls back to the plain date format.
    assert_eq!(f.format("%Ex", &t), "02.01.2006");
    assert_eq!(f.format("%EY", &t), "2006");
}
