//! Feed renderer
//!
//! Renders feed items to an RSS 2.0 XML document. Pure and deterministic
//! except for the embedded last-build-date, which is set to render time.

use chrono::Utc;

use crate::domain::entities::{item_guid, FeedItem};
use crate::error::RenderError;

/// Canonical site the feed describes.
const SITE_LINK: &str = "https://jasonspielman.com";

const CHANNEL_TITLE: &str = "Jason Spielman - Design Portfolio";

const CHANNEL_DESCRIPTION: &str = "Latest projects and design work from Jason Spielman's \
     portfolio - featuring UX design, brand identity, and innovative digital experiences";

const CHANNEL_CONTACT: &str = "jason@jasonspielman.com (Jason Spielman)";

/// Origin used for the self-referencing link when no deployment host is
/// configured.
const FALLBACK_SELF_ORIGIN: &str = "https://jasonspielman-rss.vercel.app";

/// Render the items into a complete RSS 2.0 document.
///
/// `deploy_host` is the deployment environment's host name, used to build
/// the channel's self-referencing URL. Titles and descriptions are untrusted
/// and go out CDATA-wrapped; `link` and `guid` are interpolated raw, which
/// is accepted for the URL-shaped values this pipeline produces.
pub fn render_feed(items: &[FeedItem], deploy_host: Option<&str>) -> Result<String, RenderError> {
    if items.is_empty() {
        return Err(RenderError::NoItems);
    }

    let mut buf = String::new();
    buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    buf.push_str(
        "<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\" \
         xmlns:content=\"http://purl.org/rss/1.0/modules/content/\">\n",
    );
    buf.push_str("  <channel>\n");
    buf.push_str(&format!("    <title>{}</title>\n", CHANNEL_TITLE));
    buf.push_str(&format!("    <link>{}</link>\n", SITE_LINK));
    buf.push_str(&format!(
        "    <description>{}</description>\n",
        CHANNEL_DESCRIPTION
    ));
    buf.push_str("    <language>en-us</language>\n");
    buf.push_str(&format!(
        "    <lastBuildDate>{}</lastBuildDate>\n",
        Utc::now().to_rfc2822()
    ));
    buf.push_str(&format!(
        "    <managingEditor>{}</managingEditor>\n",
        CHANNEL_CONTACT
    ));
    buf.push_str(&format!("    <webMaster>{}</webMaster>\n", CHANNEL_CONTACT));
    buf.push_str("    <category>Design</category>\n");
    buf.push_str("    <category>UX</category>\n");
    buf.push_str("    <category>Portfolio</category>\n");
    buf.push_str("    <ttl>900</ttl>\n");
    buf.push_str(&format!(
        "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        self_link(deploy_host)
    ));
    buf.push_str("    <image>\n");
    buf.push_str(&format!("      <url>{}/favicon.ico</url>\n", SITE_LINK));
    buf.push_str(&format!("      <title>{}</title>\n", CHANNEL_TITLE));
    buf.push_str(&format!("      <link>{}</link>\n", SITE_LINK));
    buf.push_str("    </image>\n");

    for item in items {
        buf.push_str(&render_item(item));
    }

    buf.push_str("  </channel>\n");
    buf.push_str("</rss>\n");

    Ok(buf)
}

/// The synthetic feed served when rendering the real one fails.
pub fn render_error_feed() -> String {
    let item = FeedItem {
        title: "RSS Service Error".to_string(),
        link: SITE_LINK.to_string(),
        description: "There was an error generating the RSS feed. Please try again later."
            .to_string(),
        pub_date: Utc::now(),
        guid: item_guid("error", "render"),
    };
    render_feed(&[item], None).expect("error feed has exactly one item")
}

fn render_item(item: &FeedItem) -> String {
    let mut buf = String::new();
    buf.push_str("    <item>\n");
    buf.push_str(&format!("      <title>{}</title>\n", cdata(&item.title)));
    buf.push_str(&format!("      <link>{}</link>\n", item.link));
    buf.push_str(&format!(
        "      <description>{}</description>\n",
        cdata(&item.description)
    ));
    buf.push_str(&format!(
        "      <pubDate>{}</pubDate>\n",
        item.pub_date.to_rfc2822()
    ));
    buf.push_str(&format!(
        "      <guid isPermaLink=\"false\">{}</guid>\n",
        item.guid
    ));
    buf.push_str("      <category>Design</category>\n");
    buf.push_str("      <author>Jason Spielman</author>\n");
    buf.push_str("    </item>\n");
    buf
}

/// Wrap untrusted text in a CDATA section. An embedded `]]>` would terminate
/// the section early, so it is split across two sections.
fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

fn self_link(deploy_host: Option<&str>) -> String {
    match deploy_host {
        Some(host) => format!("https://{}/api/rss", host),
        None => format!("{}/api/rss", FALLBACK_SELF_ORIGIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(title: &str, description: &str) -> FeedItem {
        FeedItem {
            title: title.to_string(),
            link: SITE_LINK.to_string(),
            description: description.to_string(),
            pub_date: Utc::now(),
            guid: item_guid("text", title),
        }
    }

    fn assert_well_formed(xml: &str) {
        let mut reader = quick_xml::Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("malformed xml: {}", e),
            }
        }
    }

    #[test]
    fn renders_channel_metadata() {
        let xml = render_feed(&[item("A project", "About a project")], None).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<rss version=\"2.0\""));
        assert!(xml.contains("<title>Jason Spielman - Design Portfolio</title>"));
        assert!(xml.contains("<language>en-us</language>"));
        assert!(xml.contains("<ttl>900</ttl>"));
        assert!(xml.contains("<lastBuildDate>"));
        assert!(xml.contains("<image>"));
        assert_well_formed(&xml);
    }

    #[test]
    fn item_fields_are_rendered() {
        let xml = render_feed(&[item("A project", "About a project")], None).unwrap();

        assert!(xml.contains("<title><![CDATA[A project]]></title>"));
        assert!(xml.contains("<description><![CDATA[About a project]]></description>"));
        assert!(xml.contains("<guid isPermaLink=\"false\">jasonspielman-text-"));
        assert!(xml.contains("<category>Design</category>"));
    }

    #[test]
    fn empty_item_list_is_rejected() {
        assert_eq!(render_feed(&[], None), Err(RenderError::NoItems));
    }

    #[test]
    fn markup_breaking_characters_stay_well_formed() {
        let xml = render_feed(
            &[
                item("Ampersands & <angles>", "a < b && c > d"),
                item("CDATA terminator ]]> inside", "tail ]]>]]> end"),
                item("]]>", "leading terminator"),
            ],
            None,
        )
        .unwrap();

        assert_well_formed(&xml);
        // The terminator never appears as a literal inside one CDATA section.
        assert!(xml.contains("]]]]><![CDATA[>"));
    }

    #[test]
    fn renders_up_to_ten_items() {
        let items: Vec<FeedItem> = (0..10)
            .map(|i| item(&format!("Project {}", i), "desc"))
            .collect();
        let xml = render_feed(&items, None).unwrap();

        assert_eq!(xml.matches("<item>").count(), 10);
        assert_well_formed(&xml);
    }

    #[test]
    fn self_link_uses_deploy_host_when_present() {
        let xml = render_feed(&[item("t", "d")], Some("feeds.example.dev")).unwrap();
        assert!(xml.contains("href=\"https://feeds.example.dev/api/rss\""));

        let fallback = render_feed(&[item("t", "d")], None).unwrap();
        assert!(fallback.contains("href=\"https://jasonspielman-rss.vercel.app/api/rss\""));
    }

    #[test]
    fn error_feed_is_valid_rss() {
        let xml = render_error_feed();

        assert!(xml.contains("<title><![CDATA[RSS Service Error]]></title>"));
        assert!(xml.contains("jasonspielman-error-"));
        assert_well_formed(&xml);
    }
}
