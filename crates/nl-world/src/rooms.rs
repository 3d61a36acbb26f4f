//! The town: every room and its exit table.
//!
//! Exit keywords are deliberately generous: compass directions plus the
//! nouns a player would naturally type (`shop`, `counter`, `trapdoor`).
//! Order matters: exits are shown in declaration order.

use nl_core::{Room, WorldState};

pub(crate) fn install(world: &mut WorldState) {
    world.add_room(
        Room::new(
            "outside",
            "Outside the Shopfront",
            "You stand on damp pavement outside a narrow tech shop. Retro kit fogs \
             the window, LEDs blinking like polite fireflies beneath a neon sign \
             that can't decide on its name. The air tastes of solder, wet concrete, \
             and the rumour of a storm rehearsing just out of sight.\n\nA faint \
             metallic glint lurks near the threshold. Across the road a warm HOUSE \
             window glows; east the SHOP door waits; north a station sign blinks \
             DELAYED; south the coast breathes salt.",
        )
        .with_exit("east", "store")
        .with_exit("in", "store")
        .with_exit("store", "store")
        .with_exit("shop", "store")
        .with_exit("inside", "store")
        .with_exit("west", "home")
        .with_exit("home", "home")
        .with_exit("house", "home")
        .with_exit("street", "home")
        .with_exit("north", "train_station")
        .with_exit("train", "train_station")
        .with_exit("station", "train_station")
        .with_exit("south", "coast_line")
        .with_exit("coast", "coast_line")
        .with_exit("shore", "coast_line")
        .with_objects(["quarter", "neon_sign", "storefront_window"])
        .with_npcs(["friendly_lookout"])
        .with_flag("storm_warning_given", false),
    );

    world.add_room(
        Room::new(
            "store",
            "Tech Shop",
            "You slip into a shop paused mid-thought. Shelves of prepaid AI cards \
             stand to attention. Stacks of personal AI boxes sit mid-restock, one \
             sporting a post-it that flaps like a prophecy while another box shouts \
             a double-negative warning. Someone left in a hurry and forgot to tidy \
             their future.\n\nThe counter faces you, a brass bell guarding a staff \
             door with a judging keyhole. North the aisles lean into retro games; \
             south the video rigs wait; east a sealed back area dares you to earn \
             entry; west the street keeps breathing rain.",
        )
        .with_exit("west", "outside")
        .with_exit("out", "outside")
        .with_exit("outside", "outside")
        .with_exit("exit", "outside")
        .with_exit("north", "store_games")
        .with_exit("left", "store_games")
        .with_exit("games", "store_games")
        .with_exit("south", "store_content")
        .with_exit("right", "store_content")
        .with_exit("content", "store_content")
        .with_exit("east", "backrooms_entry")
        .with_exit("back", "backrooms_entry")
        .with_exit("counter", "backrooms_entry")
        .with_exit("door", "backrooms_entry")
        .with_objects([
            "ai_gift_cards",
            "personal_ai_box",
            "postit_future",
            "ai_box_warning",
            "counter_bell",
            "backroom_door",
        ])
        .with_flag("backdoor_unlocked", false),
    );

    world.add_room(
        Room::new(
            "store_content",
            "Media Room",
            "Tripods and ring lights stand like polite sentries around a long edit \
             bench. A banner above the racks whispers: 'Don't forget to check my \
             YouTube channel!' Shelves labelled UNFINISHED IDEAS sag under tangled \
             piles of printed QR codes.\n\nIn one corner a greenscreen sags \
             slightly while a camera blinks its tally light, still recording as if \
             the take never ended. The murmur from the shop floor drifts in with \
             the smell of hot cables. A doorway leads deeper into the books and \
             music section.",
        )
        .with_exit("north", "store")
        .with_exit("back", "store")
        .with_exit("out", "store")
        .with_exit("shop", "store")
        .with_exit("east", "store_books")
        .with_exit("forward", "store_books")
        .with_exit("books", "store_books")
        .with_objects(["youtube_banner", "unfinished_qr_shelf", "recording_camera"]),
    );

    world.add_room(
        Room::new(
            "store_books",
            "Books and Music Section",
            "This quieter corner smells of paper, dust, and half-finished melodies. \
             A pedestal book titled THE CITY glows from below with a small LED, \
             pages thick with crossings-out and restarts. Nearby, a radio plays \
             songs that cut off just before the chorus, as if the world keeps \
             changing stations mid-sentence.\n\nPost-it notes cling to a crooked \
             music shelf; one reads 'misguided' in affectionate frustration. \
             Something weighty shifts inside THE CITY when you tilt it, like a key \
             that has been waiting for the right page.",
        )
        .with_exit("west", "store_content")
        .with_exit("back", "store_content")
        .with_exit("out", "store_content")
        .with_objects(["city_book", "music_radio", "misguided_postit"]),
    );

    world.add_room(
        Room::new(
            "store_games",
            "Retro Video-Games Aisle",
            "This corner smells of cardboard ink and joystick plastic. Posters for \
             Tomb Raider, Final Fantasy VII, Crash Bandicoot, and MediEvil cling to \
             the wall like relics. A towering LittleBigPlanet standee beams in \
             oversized colour, BAFTA laurels taped on as if to reassure you you're \
             still in a shop.\n\nOne battered copy of LittleBigPlanet has been \
             turned around, a handwritten note visible through cracked plastic. \
             Shelves overflow with duplicates, as though someone refused to stop \
             believing in play.",
        )
        .with_exit("south", "store")
        .with_exit("back", "store")
        .with_exit("out", "store")
        .with_exit("shop", "store")
        .with_objects([
            "nostalgia_posters",
            "lbp_standee",
            "lbp_box",
            "unfinished_game_notebook",
        ]),
    );

    world.add_room(
        Room::new(
            "backrooms_entry",
            "Backrooms Entrance",
            "The air thickens into ozone and dust. Metal shelving hugs the walls, \
             holding abandoned prototypes and ghost cables. Marker arrows on a \
             battered clipboard all converge on a stairwell wrapped in chain; the \
             padlock watches you the way bureaucracy watches form letters.\n\nFor \
             now the brighter SHOP waits behind you; deeper down is sealed until \
             the right keycard makes a case.",
        )
        .with_exit("west", "store")
        .with_exit("back", "store")
        .with_exit("out", "store")
        .with_exit("shop", "store")
        .with_exit("down", "backrooms_deep")
        .with_exit("east", "backrooms_deep")
        .with_exit("forward", "backrooms_deep")
        .with_exit("stairs", "backrooms_deep")
        .with_objects(["sealed_stairs", "scattered_notebooks", "merging_notebook"])
        .with_flag("sealed", true),
    );

    world.add_room(
        Room::new(
            "backrooms_deep",
            "Backrooms - Deep Down",
            "Concrete squeezes tight and the lights flicker in a rhythm that might \
             be Morse or your pulse. The door back up is bolted with a neat \
             coin-sized slot, testing whether you kept a certain quarter. \
             Condensation beads taste of static and overheated daydreams.\n\nA low \
             opening breathes towards a murky tunnel where the storm sounds like \
             someone shuffling note cards.",
        )
        .with_exit("west", "backrooms_entry")
        .with_exit("up", "backrooms_entry")
        .with_exit("back", "backrooms_entry")
        .with_exit("east", "tunnel")
        .with_exit("forward", "tunnel")
        .with_exit("tunnel", "tunnel")
        .with_npcs(["backroom_bot"])
        .with_flag("requires_quarter", true),
    );

    world.add_room(
        Room::new(
            "home",
            "Home",
            "A small home that feels lived-in rather than staged. Shoes pile \
             hopefully by the door. Children's drawings and family photos climb \
             the hallway, charting a move from Portugal to the UK and onward into \
             cheerful chaos. In the lounge a TV plays silly music while UNO cards \
             scatter under small hands.\n\nWarmth presses against the rain \
             outside. The street lies east; a doorway towards the office stands \
             invitingly open.",
        )
        .with_exit("east", "outside")
        .with_exit("out", "outside")
        .with_exit("street", "outside")
        .with_exit("outside", "outside")
        .with_exit("north", "home_office")
        .with_exit("office", "home_office")
        .with_exit("up", "home_office")
        .with_objects(["family_photos"])
        .with_npcs(["sofia", "lilah", "olivia"]),
    );

    world.add_room(
        Room::new(
            "home_office",
            "Home Office",
            "A small, messy home office humming with ambition. Coding and sci-fi \
             books lean on shelves beside tangled VR headsets. A wide monitor \
             glows with half-written code; headphones rest like a coiled thought. \
             A tripod-mounted camera swivels with your movement, red light quietly \
             recording. In the corner a metal trapdoor crouches beneath cables, \
             pretending to be shy.",
        )
        .with_exit("south", "home")
        .with_exit("back", "home")
        .with_exit("out", "home")
        .with_exit("down", "tunnel")
        .with_exit("trapdoor", "tunnel")
        .with_objects(["monitor_notes", "tracking_camera", "trapdoor_plate"])
        .with_npcs(["desk_bot"]),
    );

    world.add_room(
        Room::new(
            "tunnel",
            "The Tunnel",
            "The tunnel tastes of damp concrete and bottled thunder. Rusted pipes \
             breathe in time with your pulse. A wristwatch ticks on the floor at \
             triple speed, trying to outrun the storm. Voices drift in the gloom, \
             each convinced the world is about to fold in a different direction.",
        )
        .with_exit("west", "backrooms_deep")
        .with_exit("back", "backrooms_deep")
        .with_exit("opening", "backrooms_deep")
        .with_objects(["fast_watch", "sealed_trapdoor"])
        .with_npcs([
            "past_paranoid",
            "future_paranoid",
            "lost_wanderer",
            "compilation_paranoid",
        ]),
    );

    world.add_room(
        Room::new(
            "train_station",
            "Train Station",
            "A compact, clean platform stretches further than physics promised. \
             The display insists the next train is delayed, ETA: UNKNOWN. A \
             Portugal-to-UK poster peels at the edges, fresh marker scribbles \
             biting through the nostalgia. The air hisses like a train that may or \
             may not ever arrive.",
        )
        .with_exit("south", "outside")
        .with_exit("back", "outside")
        .with_exit("out", "outside")
        .with_exit("street", "outside")
        .with_objects(["poster_ad", "memory_notebook", "coffee_cup"])
        .with_npcs(["coffee_vendor"]),
    );

    world.add_room(
        Room::new(
            "coast_line",
            "Coast Line",
            "A ragged coastline unfurls. Waves hammer the rocks with patient fury, \
             spray mixing with fog. A blurry red flash pulses from an unseen \
             lighthouse across the water. Wind builds and tastes of salt and \
             static, as though the ocean is tuning a radio to someone else's \
             life.\n\nA glass bottle lies near a bench where two figures study the \
             horizon from opposite philosophies.",
        )
        .with_exit("north", "outside")
        .with_exit("back", "outside")
        .with_exit("out", "outside")
        .with_exit("street", "outside")
        .with_objects(["message_bottle", "coast_city_book"])
        .with_npcs(["restless_twin", "cautious_twin"]),
    );
}
