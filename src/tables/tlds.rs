//! Domaines de premier niveau reconnus (IANA, sous-ensemble courant).

use phf::phf_set;

pub(super) static TLDS: phf::Set<&'static str> = phf_set! {
    "ac", "academy", "accountant", "accountants", "actor", "ad", "adult", "ae", "aero", "af",
    "ag", "agency", "ai", "airforce", "al", "am", "ao", "apartments", "app", "aq",
    "ar", "archi", "army", "arpa", "art", "as", "asia", "associates", "at", "attorney",
    "au", "auction", "audio", "auto", "autos", "aw", "ax", "az", "ba", "baby",
    "band", "bank", "bar", "bargains", "bb", "bd", "be", "beer", "berlin", "best",
    "bet", "bf", "bg", "bh", "bi", "bible", "bid", "bike", "bingo", "bio",
    "biz", "bj", "black", "blog", "blue", "bm", "bn", "bo", "boats", "bond",
    "boutique", "br", "bs", "bt", "build", "builders", "business", "buzz", "bw", "by",
    "bz", "ca", "cab", "cafe", "cam", "camera", "camp", "capital", "car", "cards",
    "care", "career", "careers", "cars", "casa", "cash", "casino", "cat", "catering", "cc",
    "cd", "center", "ceo", "cf", "cg", "ch", "charity", "chat", "cheap", "church",
    "ci", "city", "ck", "cl", "claims", "cleaning", "click", "clinic", "clothing", "cloud",
    "club", "cm", "cn", "co", "coach", "codes", "coffee", "college", "com", "community",
    "company", "computer", "condos", "construction", "consulting", "contractors", "cooking", "cool", "coop", "country",
    "coupons", "courses", "cr", "credit", "creditcard", "cricket", "cruises", "cu", "cv", "cw",
    "cx", "cy", "cymru", "cz", "dance", "date", "dating", "de", "deals", "degree",
    "delivery", "democrat", "dental", "dentist", "design", "dev", "diamonds", "diet", "digital", "direct",
    "directory", "discount", "dj", "dk", "dm", "do", "doctor", "dog", "domains", "download",
    "dz", "earth", "ec", "eco", "edu", "education", "ee", "eg", "email", "energy",
    "engineer", "engineering", "enterprises", "equipment", "er", "es", "estate", "et", "eu", "events",
    "exchange", "expert", "exposed", "express", "fail", "faith", "family", "fan", "fans", "farm",
    "fashion", "fi", "film", "finance", "financial", "fish", "fishing", "fit", "fitness", "fj",
    "fk", "flights", "florist", "flowers", "fm", "fo", "football", "forsale", "foundation", "fr",
    "fun", "fund", "furniture", "futbol", "fyi", "ga", "gallery", "game", "games", "garden",
    "gay", "gb", "gd", "ge", "gf", "gg", "gh", "gi", "gift", "gifts",
    "gives", "gl", "glass", "global", "gm", "gmbh", "gn", "gold", "golf", "google",
    "gov", "gp", "gq", "gr", "graphics", "gratis", "green", "gripe", "group", "gs",
    "gt", "gu", "guide", "guitars", "guru", "gw", "gy", "hair", "haus", "health",
    "healthcare", "help", "hiphop", "hk", "hm", "hn", "hockey", "holdings", "holiday", "homes",
    "horse", "hospital", "host", "hosting", "house", "how", "hr", "ht", "hu", "icu",
    "id", "ie", "il", "im", "immo", "immobilien", "in", "inc", "industries", "info",
    "ink", "institute", "insure", "int", "international", "investments", "io", "iq", "ir", "irish",
    "is", "it", "je", "jetzt", "jewelry", "jm", "jo", "jobs", "jp", "juegos",
    "kaufen", "ke", "kg", "kh", "ki", "kim", "kitchen", "kiwi", "km", "kn",
    "kp", "kr", "kw", "ky", "kz", "la", "land", "lat", "law", "lawyer",
    "lb", "lc", "lease", "legal", "lgbt", "li", "life", "lighting", "limited", "limo",
    "link", "live", "lk", "llc", "loan", "loans", "lol", "london", "love", "lr",
    "ls", "lt", "ltd", "lu", "luxury", "lv", "ly", "ma", "maison", "management",
    "market", "marketing", "mba", "mc", "md", "me", "media", "memorial", "men", "menu",
    "mg", "mh", "miami", "mil", "mk", "ml", "mm", "mn", "mo", "mobi",
    "moda", "moe", "mom", "money", "monster", "mortgage", "motorcycles", "mov", "movie", "mp",
    "mq", "mr", "ms", "mt", "mu", "museum", "music", "mv", "mw", "mx",
    "my", "mz", "na", "name", "navy", "nc", "ne", "net", "network", "new",
    "news", "nf", "ng", "ni", "ninja", "nl", "no", "np", "nr", "nu",
    "nyc", "nz", "observer", "om", "one", "onl", "online", "ooo", "org", "pa",
    "page", "paris", "partners", "parts", "party", "pe", "pet", "pf", "pg", "ph",
    "phd", "photo", "photography", "photos", "pics", "pictures", "pink", "pizza", "pk", "pl",
    "place", "plumbing", "plus", "pm", "pn", "poker", "porn", "post", "pr", "press",
    "pro", "productions", "promo", "properties", "property", "ps", "pt", "pub", "pw", "py",
    "qa", "quest", "racing", "radio", "re", "realestate", "realty", "recipes", "red", "rehab",
    "reise", "reisen", "rent", "rentals", "repair", "report", "republican", "rest", "restaurant", "review",
    "reviews", "rich", "rip", "ro", "rocks", "rodeo", "rs", "ru", "run", "rw",
    "sa", "sale", "salon", "sarl", "sb", "sc", "school", "schule", "science", "sd",
    "se", "security", "services", "sex", "sexy", "sg", "sh", "shiksha", "shoes", "shop",
    "shopping", "show", "si", "singles", "site", "sk", "ski", "skin", "sl", "sm",
    "sn", "so", "soccer", "social", "software", "solar", "solutions", "space", "sport", "sr",
    "ss", "st", "store", "stream", "studio", "study", "style", "su", "sucks", "supplies",
    "supply", "support", "surf", "surgery", "sv", "swiss", "sx", "sy", "systems", "sz",
    "tattoo", "tax", "taxi", "tc", "td", "team", "tech", "technology", "tel", "tennis",
    "tf", "tg", "th", "theater", "theatre", "tickets", "tienda", "tips", "tires", "tj",
    "tk", "tl", "tm", "tn", "to", "today", "tokyo", "tools", "top", "tours",
    "town", "toys", "tr", "trade", "trading", "training", "travel", "tt", "tube", "tv",
    "tw", "tz", "ua", "ug", "uk", "university", "uno", "us", "uy", "uz",
    "va", "vacations", "vc", "ve", "vegas", "ventures", "vet", "vg", "vi", "viajes",
    "video", "villas", "vin", "vip", "vision", "vn", "vodka", "vote", "voting", "voto",
    "voyage", "vu", "wales", "wang", "watch", "webcam", "website", "wedding", "wf", "wiki",
    "win", "wine", "work", "works", "world", "ws", "wtf", "xxx", "xyz", "ye",
    "yoga", "yt", "za", "zm", "zone", "zw",
};
