// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use rss::extension::itunes::{
    ITunesCategory, ITunesChannelExtension, ITunesItemExtension, ITunesOwner,
};
use rss::{Channel, Guid, Image, Item};

use crate::error::RenderError;
use crate::podcast::{FeedItem, Owner, PodcastFeed};
use crate::taxonomy::CategoryAssignment;

const ITUNES_NAMESPACE: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";

fn non_empty(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|s| !s.is_empty())
}

impl PodcastFeed {
    /// Map the feed onto an RSS channel with the iTunes podcast extension
    pub fn to_channel(&self) -> Channel {
        let mut channel = Channel::default();
        channel.set_namespaces(BTreeMap::from([(
            "itunes".to_string(),
            ITUNES_NAMESPACE.to_string(),
        )]));

        channel.set_title(self.title.as_str());
        channel.set_link(self.link.as_str());
        channel.set_description(self.description.as_str());
        channel.set_language(non_empty(&self.language));
        channel.set_copyright(non_empty(&self.copyright));
        channel.set_generator(Some(self.generator.clone()));
        channel.set_pub_date(self.pub_date.map(|dt| dt.to_rfc2822()));
        channel.set_last_build_date(Some(self.last_build_date.to_rfc2822()));
        channel.set_managing_editor(self.owner.as_ref().and_then(managing_editor));

        if !self.image.is_empty() {
            let mut image = Image::default();
            image.set_url(self.image.as_str());
            image.set_title(self.title.as_str());
            image.set_link(self.link.as_str());
            channel.set_image(Some(image));
        }

        let mut itunes = ITunesChannelExtension::default();
        itunes.set_summary(non_empty(&self.description));
        itunes.set_image(non_empty(&self.image));
        itunes.set_subtitle(non_empty(&self.subtitle));
        itunes.set_author(non_empty(&self.author));
        itunes.set_categories(self.category.iter().map(itunes_category).collect::<Vec<_>>());
        itunes.set_owner(self.owner.as_ref().map(itunes_owner));
        itunes.set_explicit(self.explicit.map(|flag| flag.as_str().to_string()));
        if self.block {
            itunes.set_block(Some("yes".to_string()));
        }
        channel.set_itunes_ext(Some(itunes));

        channel.set_items(self.items().iter().map(rss_item).collect::<Vec<_>>());
        channel
    }

    /// Encode the feed as an RSS document
    pub fn to_xml(&self) -> Result<String, RenderError> {
        let bytes = self.to_channel().write_to(Vec::new())?;
        Ok(String::from_utf8(bytes)?)
    }
}

fn managing_editor(owner: &Owner) -> Option<String> {
    match (owner.email.is_empty(), owner.name.is_empty()) {
        (true, _) => None,
        (false, true) => Some(owner.email.clone()),
        (false, false) => Some(format!("{} ({})", owner.email, owner.name)),
    }
}

fn itunes_owner(owner: &Owner) -> ITunesOwner {
    let mut itunes_owner = ITunesOwner::default();
    itunes_owner.set_name(non_empty(&owner.name));
    itunes_owner.set_email(non_empty(&owner.email));
    itunes_owner
}

fn itunes_category(assignment: &CategoryAssignment) -> ITunesCategory {
    let mut category = ITunesCategory::default();
    category.set_text(assignment.category.as_str());

    if let Some(name) = &assignment.subcategory {
        let mut subcategory = ITunesCategory::default();
        subcategory.set_text(name.as_str());
        category.set_subcategory(Some(Box::new(subcategory)));
    }

    category
}

fn rss_item(feed_item: &FeedItem) -> Item {
    let mut guid = Guid::default();
    guid.set_value(feed_item.guid.as_str());
    guid.set_permalink(false);

    let mut enclosure = rss::Enclosure::default();
    enclosure.set_url(feed_item.enclosure.url.as_str());
    enclosure.set_mime_type(feed_item.enclosure.media_type);
    enclosure.set_length(feed_item.enclosure.length.to_string());

    let mut itunes = ITunesItemExtension::default();
    itunes.set_subtitle(non_empty(&feed_item.subtitle));
    itunes.set_summary(Some(feed_item.description.clone()));
    itunes.set_image(non_empty(&feed_item.image));
    itunes.set_duration(non_empty(&feed_item.duration));
    itunes.set_order(Some(feed_item.order.to_string()));
    itunes.set_explicit(feed_item.explicit.map(|flag| flag.as_str().to_string()));

    let mut item = Item::default();
    item.set_guid(Some(guid));
    item.set_title(Some(feed_item.title.clone()));
    item.set_link(non_empty(&feed_item.link));
    item.set_description(Some(feed_item.description.clone()));
    item.set_pub_date(Some(feed_item.pub_date.to_rfc2822()));
    item.set_enclosure(Some(enclosure));
    item.set_itunes_ext(Some(itunes));
    item
}
