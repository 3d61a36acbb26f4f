//! Every object in the world, with aliases and use text.

use nl_core::{Object, WorldState};

pub(crate) fn install(world: &mut WorldState) {
    world.add_object(
        Object::new(
            "quarter",
            "tarnished quarter",
            "A tarnished quarter from 1984, edges smoothed by anxious flipping. \
             Someone scratched D.N. into the metal. It's warmer than it ought to \
             be, as if memory keeps its own heat.",
        )
        .in_room("outside")
        .with_aliases(["quarter", "coin", "money"])
        .portable()
        .with_use_text(
            "You flip the quarter. The neon catches it mid-spin, scattering tiny \
             constellations over your palm. It lands with a polite clink that \
             sounds like the start of something.",
        ),
    );

    world.add_object(
        Object::new(
            "neon_sign",
            "flickering neon sign",
            "Up close the flicker sharpens into letters: METAPHORA. The tubes buzz \
             like thoughts trying to finish themselves, the M faltering as if it \
             wants to become a metaphor for everything else.",
        )
        .in_room("outside")
        .with_aliases(["neon", "sign", "lights"]),
    );

    world.add_object(
        Object::new(
            "storefront_window",
            "storefront window",
            "Walkmen, pagers, consoles, and homebrew boards crowd the glass. A \
             camcorder's tiny screen loops a clip of someone soldering at 3am \
             while the rain blurs the edges.",
        )
        .in_room("outside")
        .with_aliases(["window", "display", "retro tech"]),
    );

    world.add_object(
        Object::new(
            "ai_gift_cards",
            "AI access cards",
            "Plastic gift cards promise minutes with distant minds. Each one has a \
             scribbled note about latency, capability, and which models make the \
             best company at 2am.",
        )
        .in_room("store")
        .with_aliases(["cards", "gift cards", "codes", "models"]),
    );

    world.add_object(
        Object::new(
            "personal_ai_box",
            "personal AI box",
            "Cardboard towers of personal AI units lean like they're gossiping. \
             Shipping labels mark destinations that never happened. A flap hangs \
             open, begging to be peered into.",
        )
        .in_room("store")
        .with_aliases(["ai box", "box", "personal box"])
        .with_use_text(
            "You peer into the box. The wiring diagram looks suspiciously like a \
             branching timeline. For a heartbeat you feel you know how the storm \
             ends. The feeling lingers like static.",
        ),
    );

    world.add_object(
        Object::new(
            "postit_future",
            "flapping post-it",
            "The post-it clings to a box corner. In messy handwriting: 'these are \
             yet to happen'. Ink wobbles where the writer hesitated.",
        )
        .in_room("store")
        .with_aliases(["post-it", "note", "sticky note"]),
    );

    world.add_object(
        Object::new(
            "ai_box_warning",
            "warning label",
            "One box is stamped: 'Don't use at your own risk!' The double negative \
             makes it either a dare or a plea.",
        )
        .in_room("store")
        .with_aliases(["warning", "label", "box warning"]),
    );

    world.add_object(
        Object::new(
            "counter_bell",
            "brass counter bell",
            "A brass bell polished by hopeful customers. It waits atop the counter \
             like an invitation to bother the void.",
        )
        .in_room("store")
        .with_aliases(["bell", "counter"])
        .with_use_text(
            "You ping the bell. The ring stretches into the shelves and fades. No \
             clerk appears, unless you count the server hum perking up.",
        ),
    );

    world.add_object(
        Object::new(
            "backroom_door",
            "staff door",
            "A heavy door hides behind the counter, paint chipped by impatient \
             hands. The keyhole peers back with faint judgement.",
        )
        .in_room("store")
        .with_aliases(["door", "back door", "counter door"])
        .with_use_text(
            "The handle refuses to budge. A tiny engraving reads BACKDOOR-KEY-1, \
             as if the door expects you to have read the manual.",
        ),
    );

    world.add_object(
        Object::new(
            "nostalgia_posters",
            "retro posters",
            "Sun-faded posters for Tomb Raider, Final Fantasy VII, Crash Bandicoot, \
             and MediEvil cling to the wall. Each caption promises a world that \
             once felt infinite.",
        )
        .in_room("store_games")
        .with_aliases(["posters", "wall art", "games"]),
    );

    world.add_object(
        Object::new(
            "lbp_standee",
            "LittleBigPlanet standee",
            "A large cardboard Sackboy beams in oversized colour. BAFTA laurels \
             are taped to the corner, proud and slightly peeled. A sticker tucked \
             under its foot reads 'build loudly / truthfully'.",
        )
        .in_room("store_games")
        .with_aliases(["standee", "little big planet", "lbp", "cardboard hero"]),
    );

    world.add_object(
        Object::new(
            "lbp_box",
            "battered LittleBigPlanet box",
            "The cracked case has been turned backwards. Scrawled on the plastic: \
             'once a masterpiece, left in the few who remember'. When you tilt it, \
             the faded insert whispers about co-creation and play.",
        )
        .in_room("store_games")
        .with_aliases(["box", "lbp game", "little big planet box"]),
    );

    world.add_object(
        Object::new(
            "unfinished_game_notebook",
            "notebook marked 'PLEASE FINISH!'",
            "A dog-eared notebook lies by the game shelf. On the cover, in all \
             caps, someone wrote 'PLEASE FINISH!'. Inside are sketches of a vast \
             black tower and a lost city swallowed by desert, mechanics \
             half-scribbled between coffee stains.",
        )
        .in_room("store_games")
        .with_aliases(["notebook", "please finish", "game notebook", "designs"])
        .portable(),
    );

    world.add_object(
        Object::new(
            "youtube_banner",
            "YouTube channel banner",
            "A large banner stretches above the demo rigs: 'Don't forget to check \
             my YouTube channel!' Someone has underlined the handle three times, \
             then added a shy smiley face.",
        )
        .in_room("store_content")
        .with_aliases(["banner", "youtube", "sign"]),
    );

    world.add_object(
        Object::new(
            "unfinished_qr_shelf",
            "unfinished ideas shelf",
            "Hundreds of printed QR codes lean in untidy stacks, labelled \
             UNFINISHED IDEAS. One code, slightly straighter than the rest, has a \
             channel handle scribbled on the back in biro.",
        )
        .in_room("store_content")
        .with_aliases(["shelf", "qr codes", "ideas"]),
    );

    world.add_object(
        Object::new(
            "recording_camera",
            "recording camera",
            "A camera on a tripod faces a sagging greenscreen. Its red tally light \
             glows steadily, tracking a take that never quite wrapped.",
        )
        .in_room("store_content")
        .with_aliases(["camera", "greenscreen camera", "rig"]),
    );

    world.add_object(
        Object::new(
            "city_book",
            "book titled 'The City'",
            "A hardback book rests on a lit pedestal. Embossed on the cover: THE \
             CITY. Most pages are dense with crossings-out and fresh beginnings. \
             When you lift it, something inside shifts with a quiet clink.",
        )
        .in_room("store_books")
        .with_aliases(["book", "the city", "city"])
        .with_use_text(
            "You thumb through THE CITY. Tucked between two chapters you find a \
             frayed keycard and the outline of a story that keeps almost starting.",
        ),
    );

    world.add_object(
        Object::new(
            "music_radio",
            "stuttering radio",
            "A small shop radio plays songs that cut out just before the chorus, \
             as if commitment issues were a setting on the dial.",
        )
        .in_room("store_books")
        .with_aliases(["radio", "music", "speaker"]),
    );

    world.add_object(
        Object::new(
            "misguided_postit",
            "post-it marked 'misguided'",
            "A yellow post-it clings to the music shelf. In quick handwriting: \
             'misguided'. The arrow it once pointed to has been smudged away.",
        )
        .in_room("store_books")
        .with_aliases(["post-it", "note", "misguided"]),
    );

    world.add_object(
        Object::new(
            "backdoor_key_1",
            "frayed keycard",
            "A plastic keycard on a tired lanyard. Along one edge someone printed \
             BACKDOOR-KEY-1 in tiny capitals. It smells faintly of popcorn and old \
             carpet, as if it loitered by arcade machines for years.",
        )
        .inside("city_book")
        .with_aliases(["key", "keycard", "backdoor key", "lanyard"])
        .portable()
        .with_use_text("You thumb the keycard. Somewhere a lock seems to hold its breath."),
    );

    world.add_object(
        Object::new(
            "sealed_stairs",
            "sealed stairwell",
            "A metal stairwell drops into shadow, chained and padlocked. Dust \
             outlines the shape of keys that visited in the past.",
        )
        .in_room("backrooms_entry")
        .with_aliases(["stairs", "stairwell", "padlock", "chain"])
        .with_use_text(
            "You tug the chain. It rattles and waits for whatever was labelled \
             BACKDOOR-KEY-1 with the patience of bureaucracy.",
        ),
    );

    world.add_object(
        Object::new(
            "scattered_notebooks",
            "scattered notebooks and pages",
            "Piles of notebooks and loose pages carpet the floor. Most hold \
             half-started sentences and abandoned ideas, merging into one another \
             like a brain with too many tabs open. On the wall above, someone has \
             scratched 'Never there!' as if arguing with reality.",
        )
        .in_room("backrooms_entry")
        .with_aliases(["notebooks", "pages", "paper", "notes"]),
    );

    world.add_object(
        Object::new(
            "merging_notebook",
            "merging notebook",
            "One notebook seems to bleed into the next, lines of ink wandering \
             across covers. On its open page, a sentence repeats: 'Afraid I'll \
             forget who I was. Afraid of what I'll never be!'",
        )
        .in_room("backrooms_entry")
        .with_aliases(["notebook", "journal", "merging"]),
    );

    world.add_object(
        Object::new(
            "fast_watch",
            "hurrying watch",
            "A wristwatch ticks at triple speed, hands stuttering forward like \
             they're late for something. The crystal fogs as if breathing.",
        )
        .in_room("tunnel")
        .with_aliases(["watch", "clock", "timepiece"])
        .portable()
        .with_use_text(
            "You listen to the frantic ticking. For a moment the corridor seems to \
             speed up with it before settling back into its slow exhale.",
        ),
    );

    world.add_object(
        Object::new(
            "sealed_trapdoor",
            "ceiling trapdoor",
            "A square outline in the ceiling, damp around the edges. It looks \
             recently shut, with scrape marks where others tried their luck.",
        )
        .in_room("tunnel")
        .with_aliases(["trapdoor", "hatch", "ceiling hatch"])
        .with_use_text(
            "You push at the hatch. It stays locked from above, shuddering like it \
             remembers closing on you.",
        ),
    );

    world.add_object(
        Object::new(
            "poster_ad",
            "faded travel poster",
            "An old advert charts a route from Portugal to the UK. Marker \
             scribbles across the top declare: 'You do not understand what you're \
             leaving behind!'.",
        )
        .in_room("train_station")
        .with_aliases(["poster", "ad", "advert"]),
    );

    world.add_object(
        Object::new(
            "memory_notebook",
            "notebook titled 'All the memories that weren't'",
            "A small notebook lies open. The first page reads: 'You can feel \
             nostalgic for stuff that never happened!' Pages afterwards are blank, \
             inviting you to improvise history.",
        )
        .in_room("train_station")
        .with_aliases(["notebook", "journal", "book"])
        .portable(),
    );

    world.add_object(
        Object::new(
            "coffee_cup",
            "paper cup of coffee",
            "A steaming coffee offered freely. It smells like burnt beans and \
             small kindnesses.",
        )
        .in_room("train_station")
        .with_aliases(["coffee", "cup", "drink"])
        .portable()
        .with_use_text(
            "You sip the coffee. Warmth steadies your hands; the tannoy coughs \
             approvingly.",
        ),
    );

    world.add_object(
        Object::new(
            "message_bottle",
            "bottle with a note",
            "A clear bottle rests on the rocks. Inside, a rolled scrap of paper \
             waits. The ink has bled slightly, salt pulling at the letters.",
        )
        .in_room("coast_line")
        .with_aliases(["bottle", "message", "note"])
        .portable()
        .with_use_text(
            "You uncork the bottle and slide out the note. It reads: 'From a life \
             not yet lived. The grass did look greener!'. The bottle hums faintly \
             after you roll the note back in.",
        ),
    );

    world.add_object(
        Object::new(
            "coast_city_book",
            "weathered copy of 'The City'",
            "A damp, well-thumbed copy of THE CITY lies near the cliff edge. Only \
             the first page holds words; the rest is blank, corners softened by \
             rereads. It feels like a life paused mid-sentence.",
        )
        .in_room("coast_line")
        .with_aliases(["book", "the city", "city", "lost book"])
        .portable(),
    );

    world.add_object(
        Object::new(
            "family_photos",
            "wall of family photos",
            "Frames climb the hallway wall, charting a journey from Portugal to \
             the UK: awkward first selfies, wedding smiles, newborn squints, two \
             girls growing taller and sillier in each shot. Every photo looks \
             unapologetically happy.",
        )
        .in_room("home")
        .with_aliases(["photos", "photographs", "pictures", "frames"]),
    );

    world.add_object(
        Object::new(
            "monitor_notes",
            "monitor and notes",
            "The wide monitor shows code paused mid-thought. Sticky notes around \
             it read: 'ship something small', 'call mum', 'remember the storm is \
             weather, not fate'.",
        )
        .in_room("home_office")
        .with_aliases(["monitor", "notes", "desk"]),
    );

    world.add_object(
        Object::new(
            "tracking_camera",
            "tracking camera",
            "A tripod-mounted camera turns with your movement, red light quietly \
             accusing. Its tiny screen shows a loop of you entering, then entering \
             again.",
        )
        .in_room("home_office")
        .with_aliases(["camera", "tripod", "recorder"]),
    );

    world.add_object(
        Object::new(
            "trapdoor_plate",
            "trapdoor plate",
            "A square metal plate set into the floor. A faint draft seeps around \
             its edges, smelling of damp concrete and secrets.",
        )
        .in_room("home_office")
        .with_aliases(["trapdoor", "hatch", "floor plate"]),
    );
}
