//! Fournisseurs de messagerie gratuits grand public.

use phf::phf_set;

pub(super) static FREE_PROVIDERS: phf::Set<&'static str> = phf_set! {
    "126.com", "163.com", "21cn.com", "abv.bg",
    "aim.com", "alice.it", "aol.com", "arcor.de",
    "att.net", "bellsouth.net", "bigpond.com", "bk.ru",
    "bol.com.br", "btinternet.com", "centrum.cz", "charter.net",
    "comcast.net", "cox.net", "daum.net", "earthlink.net",
    "email.com", "excite.com", "fastmail.com", "fastmail.fm",
    "free.fr", "freenet.de", "gmail.com", "gmx.at",
    "gmx.ch", "gmx.com", "gmx.de", "gmx.fr",
    "gmx.net", "googlemail.com", "hanmail.net", "hotmail.co.uk",
    "hotmail.com", "hotmail.de", "hotmail.es", "hotmail.fr",
    "hotmail.it", "hotpop.com", "hushmail.com", "i.ua",
    "icloud.com", "inbox.com", "inbox.ru", "interia.pl",
    "juno.com", "laposte.net", "libero.it", "list.ru",
    "live.co.uk", "live.com", "live.de", "live.fr",
    "lycos.com", "mac.com", "mail.bg", "mail.com",
    "mail.ru", "me.com", "meta.ua", "msn.com",
    "naver.com", "netzero.net", "neuf.fr", "o2.pl",
    "onet.pl", "optusnet.com.au", "orange.fr", "outlook.com",
    "outlook.de", "outlook.fr", "pm.me", "proton.me",
    "protonmail.ch", "protonmail.com", "qq.com", "rambler.ru",
    "rediff.com", "rediffmail.com", "rocketmail.com", "rogers.com",
    "sbcglobal.net", "seznam.cz", "sfr.fr", "shaw.ca",
    "sina.com", "sky.com", "sohu.com", "sympatico.ca",
    "t-online.de", "talktalk.net", "terra.com.br", "tiscali.it",
    "tuta.io", "tutanota.com", "tutanota.de", "ukr.net",
    "uol.com.br", "usa.com", "verizon.net", "virgilio.it",
    "walla.co.il", "wanadoo.fr", "web.de", "wp.pl",
    "ya.ru", "yahoo.ca", "yahoo.co.in", "yahoo.co.jp",
    "yahoo.co.uk", "yahoo.com", "yahoo.com.ar", "yahoo.com.au",
    "yahoo.com.br", "yahoo.de", "yahoo.es", "yahoo.fr",
    "yahoo.it", "yandex.com", "yandex.ru", "yeah.net",
    "ymail.com", "zoho.com", "zohomail.com",
};
