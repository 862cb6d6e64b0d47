//! Dialogue bank - the static, read-only line tables.
//!
//! Candidate lines are keyed by interaction type and mood, with a
//! per-type default list. Milestone reward lines live in a separate
//! table keyed by 1-based ordinal with a completion fallback. The
//! single fixed language table is Finnish.

mod selector;

pub use selector::*;

use quiz_rules::Mood;
use serde::{Deserialize, Serialize};

/// Gameplay interaction types with mood-keyed dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    Start,
    Hint,
    Correct,
    Wrong,
}

/// Last-resort line when every lookup comes up empty.
pub const LAST_RESORT_LINE: &str = "...";

/// Fallback title and line for an out-of-range milestone reference.
pub const UNKNOWN_MILESTONE_TITLE: &str = "Salainen paketti";
pub const UNKNOWN_MILESTONE_LINE: &str = "Hmm...";

/// Candidate lines for an interaction in a specific mood. Empty when
/// the table has no mood-specific entry; callers fall back to
/// [`default_lines`].
pub fn mood_lines(interaction: Interaction, mood: Mood) -> &'static [&'static str] {
    match (interaction, mood) {
        (Interaction::Start, Mood::Curious) => &[
            "Tervetuloa pajalle, katsotaan mitä osaat.",
            "Tonttu kurkistaa kirjapinkasta ja mutisee: aloitetaan.",
            "Hmm... pitäisikö minun edes auttaa? No, mennään.",
        ],
        (Interaction::Start, _) => &[],

        (Interaction::Hint, Mood::Curious) => &[
            "Tarvitsetko jo vihjeen? No olkoon.",
            "Huhuu, katso tarkkaan – anna vihjeen johdattaa.",
            "Avaan salaisen muistikirjani vain vähän.",
        ],
        (Interaction::Hint, Mood::Cocky) => &[
            "Tässä, mutta seuraavaan vastaat itse!",
            "Vain koska olen hyvällä tuulella.",
            "Et kai tarvitse tätä joka kysyessä?",
        ],
        (Interaction::Hint, Mood::Mocking) => &[
            "Oho, taas vihje? Joko eksyit metsään?",
            "Pidän kirjaa jokaisesta vihjeestä!",
            "Jospa vielä annankin tämän... ehkä.",
        ],
        (Interaction::Hint, Mood::Impressed) => &[
            "Ehkä tämä hidastaa sinua...",
            "Otan riskin ja annan vihjeen.",
            "En malta olla auttamatta, vaikka osaat jo liikaa.",
        ],
        (Interaction::Hint, Mood::ReluctantlyHelpful) => &[
            "Hyvä on, mestari saa vihjeenkin.",
            "Älä kerro muille että autoin näin paljon.",
            "Päästän sinut käsiksi suurempaan salaisuuteen.",
        ],

        (Interaction::Correct, Mood::Curious) => &[
            "Hei, sehän meni oikein!",
            "Hyvin keksitty – tonttu nyökkää.",
            "Sinulla on selvästi lahjoja.",
        ],
        (Interaction::Correct, Mood::Cocky) => &[
            "Näköjään osuit vahingossa oikeaan.",
            "Seuraava on varmasti vaikeampi... ehkä.",
            "Tonttu naureskelee: kyllä sinä sen tajusit.",
            "Tuuriakin pitää olla.",
            "Hmph, ihan sattumalta varmaan.",
            "Ei tämä vielä mitään tarkoita.",
        ],
        (Interaction::Correct, Mood::Mocking) => &[
            "No jopas, sait jotain oikein.",
            "Ehkä olikin tuuria, hmm?",
            "Kirjaan ylös: ei enää ihan hukassa.",
        ],
        (Interaction::Correct, Mood::Impressed) => &[
            "No hyvä on, taas meni oikein...",
            "Täytyykö sinun osata KAIKKI?",
            "Tämähän alkaa olla tylsää.",
        ],
        (Interaction::Correct, Mood::ReluctantlyHelpful) => &[
            "Hyvä. Nyt avaamme pajavaraston ovia.",
            "Tämä taso ansaitsee kunnon palkinnon.",
            "En enää edes viitsi ärsyttää – liian taitavaa.",
        ],

        (Interaction::Wrong, Mood::Curious) => &[
            "Ei ihan, kokeile eri kulmaa.",
            "Tonttu pyörittelee silmiään hieman.",
            "Ei hätää, ota uusi yritys.",
        ],
        (Interaction::Wrong, Mood::Cocky) => &[
            "Olisithan voinut arvata oikein...",
            "Ei näin pitkälle pääse vahingossa.",
            "Tämän ajan jälkeen odotin parempaa.",
        ],
        (Interaction::Wrong, Mood::Mocking) => &[
            "Heh, tästä pitää kertoa muillekin tontuille.",
            "Kävikö pipari? Nimittäin väärin.",
            "Se oli jo aika villi arvaus.",
        ],
        (Interaction::Wrong, Mood::Impressed) => &[
            "Hah! Vihdoinkin virhe!",
            "No nyt vasta hengähdytin.",
            "Etkö olekaan täydellinen?",
        ],
        (Interaction::Wrong, Mood::ReluctantlyHelpful) => &[
            "Olkoon, autan vielä vaikka meni pieleen.",
            "Loppusuoralla ei saa hyytyä!",
            "Korjaa suunta – ratkaisu odottaa.",
        ],
    }
}

/// The per-type fallback list used when no mood-specific entry exists.
pub fn default_lines(interaction: Interaction) -> &'static [&'static str] {
    match interaction {
        Interaction::Start => &["Aloitetaanhan peli."],
        Interaction::Hint => &["Tässäpä pieni vihje."],
        Interaction::Correct => &["Oikein!"],
        Interaction::Wrong => &["Ei aivan."],
    }
}

/// Reward lines for a 1-based milestone ordinal. Ordinals beyond the
/// table fall back to the completion list.
pub fn milestone_lines(ordinal: usize) -> &'static [&'static str] {
    match ordinal {
        1 => &[
            "Ensimmäinen paketti kilahti!",
            "Teit juuri tarpeeksi ansaitaksesi ensimmäisen vihjeen.",
            "Hyvä, avaan varastosta ensimmäisen vihjeen.",
            "Tässä joulusipuli numero yksi.",
        ],
        2 => &[
            "Toinen taso aukeaa!",
            "Tonttu pudottaa toisen vihjeen.",
            "Paketti kaksi kolahti pöydälle.",
            "Saat toisen salaisuuden.",
        ],
        3 => &[
            "Kolmas paketti paljastuu kuin ihmeen kaupalla.",
            "Olet jo pitkällä.",
            "Tonttu poistuu ja palaa vihje kädessään.",
            "Kolmas vihje tuoksuu piparille.",
        ],
        4 => &[
            "Viimeinen aarre! Käytä viisaasti.",
            "Kaikki paketit auki.",
            "Olet ansainnut suuren salaisuuden.",
            "Tämä on loppuhuipennus.",
        ],
        _ => &[
            "Kaikki paketit kerätty! Tässä viimeinen salaisuus.",
            "Olet suorittanut koko matkan – ansaittu palkinto odottaa.",
            "Tonttu nyökkää kunnioittavasti: olet ansainnut tämän.",
            "Lopullinen lahja paljastuu nyt.",
        ],
    }
}
